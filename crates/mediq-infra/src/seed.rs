//! Example history installed on first run.
//!
//! Two complete consultations the product demos with before the user has
//! any history of their own.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use mediq_types::consult::{ChatSession, Message, MessageRole};
use mediq_types::diagnosis::{DiagnosisResult, Severity};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixed seed timestamp")
}

fn message(
    role: MessageRole,
    content: &str,
    created_at: DateTime<Utc>,
    diagnosis: Option<DiagnosisResult>,
) -> Message {
    Message {
        id: Uuid::now_v7(),
        role,
        content: content.to_string(),
        created_at,
        diagnosis,
    }
}

fn headache_consultation() -> ChatSession {
    let opened = at(2024, 1, 15, 10, 0);
    let replied = at(2024, 1, 15, 10, 1);
    ChatSession {
        id: Uuid::now_v7(),
        title: "Headache and Fever Consultation".to_string(),
        created_at: opened,
        last_updated: replied,
        messages: vec![
            message(
                MessageRole::User,
                "I have been experiencing severe headaches and fever for the past 2 days. \
                 The headache is throbbing and gets worse with light.",
                opened,
                None,
            ),
            message(
                MessageRole::Assistant,
                "Based on your symptoms of severe headaches, fever, and light sensitivity \
                 (photophobia), here is my analysis:",
                replied,
                Some(DiagnosisResult {
                    possible_conditions: vec![
                        "Migraine with fever".to_string(),
                        "Viral infection".to_string(),
                        "Tension headache with flu".to_string(),
                    ],
                    recommended_actions: vec![
                        "Ibuprofen 400mg".to_string(),
                        "Paracetamol 500mg".to_string(),
                        "Plenty of fluids".to_string(),
                    ],
                    avoid: vec![
                        "Bright lights".to_string(),
                        "Loud noises".to_string(),
                        "Caffeine".to_string(),
                        "Screen time".to_string(),
                    ],
                    severity: Severity::Medium,
                }),
            ),
        ],
    }
}

fn stomach_consultation() -> ChatSession {
    let opened = at(2024, 1, 10, 15, 30);
    let replied = at(2024, 1, 10, 15, 31);
    ChatSession {
        id: Uuid::now_v7(),
        title: "Stomach Pain Query".to_string(),
        created_at: opened,
        last_updated: replied,
        messages: vec![
            message(
                MessageRole::User,
                "I have stomach pain after eating spicy food. It feels like burning sensation.",
                opened,
                None,
            ),
            message(
                MessageRole::Assistant,
                "Your symptoms suggest acid reflux or gastritis. Here are my recommendations:",
                replied,
                Some(DiagnosisResult {
                    possible_conditions: vec![
                        "Acid reflux".to_string(),
                        "Gastritis".to_string(),
                        "Peptic ulcer".to_string(),
                    ],
                    recommended_actions: vec![
                        "Antacid tablets".to_string(),
                        "Omeprazole 20mg".to_string(),
                        "Simethicone".to_string(),
                    ],
                    avoid: vec![
                        "Spicy food".to_string(),
                        "Citrus fruits".to_string(),
                        "Coffee".to_string(),
                        "Alcohol".to_string(),
                    ],
                    severity: Severity::Low,
                }),
            ),
        ],
    }
}

/// The example sessions, most recent first.
pub fn example_history() -> Vec<ChatSession> {
    vec![headache_consultation(), stomach_consultation()]
}
