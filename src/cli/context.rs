use std::io::{self, Write};

use crate::error::TravelError;
use crate::model::Category;
use crate::ops::{ContactSession, PackingSession};

/// Line-oriented access to stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Terminal {
    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Prompt with a default shown in brackets; Enter keeps the default.
    pub fn prompt_default(&self, prompt: &str, default: &str) -> Option<String> {
        let answer = if default.is_empty() {
            self.prompt(&format!("{}: ", prompt))?
        } else {
            self.prompt(&format!("{} [{}]: ", prompt, default))?
        };
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(answer)
        }
    }

    /// Yes/no question. Anything other than y/yes counts as no.
    pub fn confirm(&self, question: &str) -> bool {
        matches!(
            self.prompt(&format!("{} (y/n): ", question))
                .map(|s| s.to_lowercase())
                .as_deref(),
            Some("y") | Some("yes")
        )
    }

    /// Asks for a category by name or number until a valid answer or EOF.
    pub fn pick_category(&self, default: Category) -> Option<Category> {
        loop {
            println!("Categories:");
            for (i, c) in Category::ALL.iter().enumerate() {
                println!("  {}. {}", i + 1, c);
            }
            let answer = self.prompt_default("Category", default.as_str())?;
            if let Ok(n) = answer.parse::<usize>() {
                if let Some(c) = n.checked_sub(1).and_then(|i| Category::ALL.get(i)) {
                    return Some(*c);
                }
            }
            match answer.parse::<Category>() {
                Ok(c) => return Some(c),
                Err(e) => println!("{}", e),
            }
        }
    }
}

pub struct CLIContext {
    pub contacts: ContactSession,
    pub packing: PackingSession,
    pub term: Terminal,
}

impl CLIContext {
    pub fn new(contacts: ContactSession, packing: PackingSession) -> Self {
        Self {
            contacts,
            packing,
            term: Terminal,
        }
    }

    pub fn print_error(&self, e: &TravelError) {
        println!("Error: {}", e);
    }
}
