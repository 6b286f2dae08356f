//! Terminal rendering of consultation transcripts and diagnosis cards.

use console::style;

use mediq_types::consult::{ChatSession, Message, MessageRole};
use mediq_types::diagnosis::{DiagnosisError, DiagnosisResult, Severity};

const DISCLAIMER: &str = "Disclaimer: This analysis is for informational purposes only. \
Please consult with a healthcare professional for proper medical advice and treatment.";

fn severity_badge(severity: Severity) -> String {
    let label = format!(" {severity} priority ");
    match severity {
        Severity::Low => style(label).black().on_green().to_string(),
        Severity::Medium => style(label).black().on_yellow().to_string(),
        Severity::High => style(label).white().on_red().to_string(),
    }
}

fn print_list_section(heading: &str, items: &[String]) {
    println!("  {}", style(heading).bold());
    for item in items {
        println!("    {} {}", style("\u{2022}").dim(), item);
    }
}

/// Print a diagnosis card: severity badge plus the three list sections.
pub fn print_diagnosis(diagnosis: &DiagnosisResult) {
    println!("  {}", severity_badge(diagnosis.severity));
    println!();
    print_list_section("Possible Conditions", &diagnosis.possible_conditions);
    println!();
    print_list_section("Recommended Care", &diagnosis.recommended_actions);
    println!();
    print_list_section("Things to Avoid", &diagnosis.avoid);
    println!();
    println!("  {}", style(DISCLAIMER).dim());
}

/// Print one message the way the chat loop shows it.
pub fn print_message(message: &Message) {
    let stamp = style(
        message
            .created_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string(),
    )
    .dim();
    match message.role {
        MessageRole::User => {
            println!("{} {} {}", style("you").blue().bold(), stamp, message.content);
        }
        MessageRole::Assistant => {
            println!(
                "{} {} {}",
                style("mediq").green().bold(),
                stamp,
                message.content
            );
            if let Some(diagnosis) = &message.diagnosis {
                println!();
                print_diagnosis(diagnosis);
            }
        }
    }
    println!();
}

/// Print a whole session transcript.
pub fn print_transcript(session: &ChatSession) {
    for message in &session.messages {
        print_message(message);
    }
}

/// Print the visible failure for a turn whose diagnosis never arrived.
pub fn print_provider_failure(err: &DiagnosisError) {
    println!(
        "  {} Could not analyze your symptoms ({err}). Your message was kept; please try again.",
        style("!").red().bold()
    );
    println!();
}
