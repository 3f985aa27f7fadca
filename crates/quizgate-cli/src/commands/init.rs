//! The `quizgate init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizgate.toml").exists() {
        println!("quizgate.toml already exists, skipping.");
    } else {
        std::fs::write("quizgate.toml", SAMPLE_CONFIG)?;
        println!("Created quizgate.toml");
    }

    let bank_path = std::path::Path::new("questions.toml");
    if bank_path.exists() {
        println!("questions.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, EXAMPLE_QUESTIONS)?;
        println!("Created questions.toml");
    }

    println!("\nNext steps:");
    println!("  1. Replace the questions in questions.toml");
    println!("  2. Run: quizgate validate --questions questions.toml");
    println!("  3. Run: quizgate serve");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgate configuration

questions = "questions.toml"
bind = "127.0.0.1:5000"

# How a learner's seed picks a question: "mersenne" keeps assignments
# identical to earlier deployments, "modulo" is seed % pool size.
assignment = "mersenne"

[scoring]
min_chars = 10
min_words = 20
max_grade = 12.0
min_sentences = 2
bonus_words = 50
"#;

const EXAMPLE_QUESTIONS: &str = r#"name = "Logical reasoning"

questions = [
    "A bat and a ball cost 1.10 in total. The bat costs 1.00 more than the ball. How much does the ball cost? Explain your reasoning.",
    "If all bloops are razzies and all razzies are lazzies, are all bloops definitely lazzies? Why?",
    "What comes next in the sequence 2, 6, 12, 20, 30, and how did you find it?",
    "Five machines take five minutes to make five widgets. How long would 100 machines take to make 100 widgets?",
    "A lily pad patch doubles in size every day and covers the lake in 48 days. When did it cover half the lake?",
    "Describe a situation where correlation might be mistaken for causation, and how you would test it.",
    "You have two ropes that each burn for exactly one hour, unevenly. How can you measure 45 minutes?",
    "Is the statement 'this sentence is false' true or false? Discuss.",
    "Three boxes are labelled apples, oranges, and mixed, and every label is wrong. How many fruits must you draw to fix the labels?",
    "Why might an argument be valid but still reach a false conclusion? Give an example.",
]
"#;
