//! Prompt Templates
//!
//! The two prompts sent to the model gateway. Both demand a bare JSON
//! object so the response parses straight into the typed route responses.
//! Wording is the marketing team's approved copy; change it there first.

/// Build the 360° growth-plan prompt for the strategist persona.
pub fn growth_plan_prompt(
    business_category: &str,
    city: Option<&str>,
    budget: Option<&str>,
    goal: &str,
) -> String {
    format!(
        "Act as a digital growth strategist. Create a 360° growth plan for a {business_category} business.\n\
         City: {city}\n\
         Budget: {budget}\n\
         Goal: {goal}\n\
         \n\
         Return a JSON object with these keys:\n\
         - marketingChannels (array of strings)\n\
         - websiteNeeds (array of strings)\n\
         - automations (array of strings)\n\
         - timeline (string)\n\
         \n\
         Keep it concise and punchy.",
        city = city.unwrap_or("Not specified"),
        budget = budget.unwrap_or("Not specified"),
    )
}

/// Build the idea-lab prompt for the product-manager persona.
pub fn idea_generator_prompt(business_type: &str, problem: &str) -> String {
    format!(
        "Act as a SaaS product manager. Generate digital ideas for a {business_type} facing this problem: \"{problem}\".\n\
         \n\
         Return a JSON object with these keys:\n\
         - websiteFeatures (array of strings)\n\
         - appIdeas (array of strings)\n\
         - automationWorkflows (array of strings)\n\
         - crmUsage (array of strings)\n\
         - monetization (array of strings)\n\
         \n\
         Focus on high-value, modern solutions.",
    )
}
