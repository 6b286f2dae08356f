//! Welcome banner for the chat loop.

use console::style;

use mediq_types::identity::UserProfile;

const EXAMPLE_PROMPTS: [&str; 4] = [
    "I have a headache and feel dizzy",
    "I have stomach pain after eating",
    "I have a persistent cough and sore throat",
    "What medicines are good for fever?",
];

/// Print the welcome banner shown when the chat loop starts.
pub fn print_welcome_banner(user: &UserProfile) {
    println!();
    println!(
        "  {} {}",
        style("Mediq").green().bold(),
        style("AI Health Consultation").bold()
    );
    println!(
        "  {}",
        style(format!(
            "Welcome back, {}. Describe your symptoms and get instant insights.",
            user.name
        ))
        .dim()
    );
    println!();
    println!("  {}", style("For example:").dim());
    for prompt in EXAMPLE_PROMPTS {
        println!("    {} \"{}\"", style("\u{2022}").dim(), style(prompt).italic());
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /quit to leave.").dim()
    );
    println!();
}
