//! Colored terminal output for the dws commands.
//!
//! Success and failure lines are the terminal analog of the original UI's
//! toast notifications; key-value and table helpers render the detail views.

use crate::types::FieldError;
use owo_colors::OwoColorize;

/// Output helper; color can be switched off for plain terminals and tests.
pub struct Output {
    colored: bool,
}

impl Output {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// A success toast.
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{} {}", "✓".green().bold(), message);
        } else {
            println!("[ok] {}", message);
        }
    }

    /// A failure toast. Goes to stderr.
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "✗".red().bold(), message);
        } else {
            eprintln!("[error] {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", "!".yellow().bold(), message.yellow());
        } else {
            eprintln!("[warn] {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.colored {
            println!("{} {}", "•".blue(), message);
        } else {
            println!("- {}", message);
        }
    }

    /// A follow-up hint, e.g. which command to run next.
    pub fn hint(&self, message: &str) {
        if self.colored {
            eprintln!("  {}", message.dimmed());
        } else {
            eprintln!("  hint: {}", message);
        }
    }

    /// Section title for a detail view.
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n{}", title.bold().underline());
        } else {
            println!("\n== {} ==", title);
        }
    }

    /// One labelled value in a detail view.
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("  {:<14} {}", format!("{}:", key).dimmed(), value);
        } else {
            println!("  {:<14} {}", format!("{}:", key), value);
        }
    }

    pub fn table_header(&self, columns: &[(&str, usize)]) {
        let line: String = columns
            .iter()
            .map(|(name, width)| format!("{:<width$}", name, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        if self.colored {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }

    pub fn table_row(&self, cells: &[(&str, usize)]) {
        let line: String = cells
            .iter()
            .map(|(value, width)| format!("{:<width$}", value, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }

    /// Renders a field-error list, one line per broken field.
    pub fn field_errors(&self, errors: &[FieldError]) {
        self.error("the submitted values are invalid:");
        for error in errors {
            if self.colored {
                eprintln!("  {} {}: {}", "→".dimmed(), error.field.bold(), error.message);
            } else {
                eprintln!("  - {}: {}", error.field, error.message);
            }
        }
    }
}
