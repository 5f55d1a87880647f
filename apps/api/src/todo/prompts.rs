//! Prompt Composer for todo recommendation.
//!
//! Two variants: one anchored to free text the user typed, one generic.
//! Both demand a JSON object with a `todos` array of exactly 3 items.

/// Todo recommendation prompt when the user supplied free-text context.
/// Replace: {user_input}, {persona}
const CONTEXTUAL_TODO_TEMPLATE: &str = r#"You are a beekeeping expert. Recommend 3 concrete beekeeping tasks based on what the user typed.

User input: "{user_input}"

Generate exactly 3 todos in this JSON format:

{
  "todos": [
    {
      "id": 1,
      "content": "task title (in English)",
      "completed": false
    }
  ]
}

Rules:
1. Recommend 3 concrete beekeeping tasks related to "{user_input}".
2. content must be in English, practical and actionable.
3. Keep content specific but short — this is a todo list.
4. id values are sequential numbers starting at 1.
5. completed is always false.
6. Follow the JSON format above exactly.

User profile: {persona}

Generate 3 todos tailored to the profile and the input above."#;

/// Generic todo recommendation prompt (no user context).
/// Replace: {persona}
const GENERIC_TODO_TEMPLATE: &str = r#"You are a beekeeping expert. Recommend a general todo list for a beekeeper.

Generate exactly 3 todos in this JSON format:

{
  "todos": [
    {
      "id": 1,
      "content": "task title (in English)",
      "completed": false
    }
  ]
}

Rules:
1. content must be in English and describe real beekeeping work.
2. Keep content specific and clear.
3. id values are sequential numbers starting at 1.
4. completed is always false.
5. Follow the JSON format above exactly.

Example beekeeping tasks:
- Hive Inspection
- Check Queen Bee Status and Egg Laying Pattern
- Honey Harvesting
- Varroa Mite Treatment
- Feeding
- Hive Cleaning
- Winter Preparation

User profile: {persona}

Generate 3 todos tailored to the profile above."#;

/// Builds the recommendation prompt. Blank user input selects the generic
/// variant.
pub fn todo_recommendation_prompt(persona: &str, user_input: &str) -> String {
    let user_input = user_input.trim();
    if user_input.is_empty() {
        GENERIC_TODO_TEMPLATE.replace("{persona}", persona)
    } else {
        CONTEXTUAL_TODO_TEMPLATE
            .replace("{user_input}", user_input)
            .replace("{persona}", persona)
    }
}
