//! Common test utilities and fixtures

#![allow(dead_code)]

use bayes_spam_filter::models::Document;

/// Render emails in the `<SUBJECT>`/`<BODY>` corpus format
pub fn corpus(emails: &[(&str, &str)]) -> String {
    emails
        .iter()
        .map(|(subject, body)| {
            format!(
                "<SUBJECT>{}</SUBJECT>\n<BODY>{}</BODY>\n",
                subject, body
            )
        })
        .collect()
}

/// Build a document from already-normalized words
pub fn doc(words: &[&str]) -> Document {
    words.iter().copied().collect()
}

/// Spam training emails about offers and money
pub fn spam_training_corpus() -> String {
    corpus(&[
        ("Exclusive OFFER inside", "Claim your money now, limited offer"),
        ("Win money", "Free offer: money back guarantee"),
    ])
}

/// Ham training emails about meetings and projects
pub fn ham_training_corpus() -> String {
    corpus(&[
        ("Project meeting", "Agenda for the project meeting on Monday"),
        ("Re: meeting", "Notes from the project review"),
    ])
}

/// Two spam and two ham test emails that a sane model gets right
pub fn test_corpora() -> (String, String) {
    let spam = corpus(&[
        ("offer", "money"),
        ("Money money money", "Exclusive free offer"),
    ]);
    let ham = corpus(&[
        ("meeting", "project"),
        ("Project notes", "see you at the meeting"),
    ]);
    (spam, ham)
}
