//! Shared interactive menu loop
//!
//! Every menu in the program (top-level and the three tools) is a `Menu`:
//! numbered entries plus a `0` exit, driven by the same state machine.
//!
//! ```text
//! AwaitingChoice --"0" / EOF--> Exited
//! AwaitingChoice --1..=n------> Dispatching --action done--> AwaitingChoice
//! AwaitingChoice --other------> AwaitingChoice (error printed)
//! ```

use crate::console::Console;
use kinema_core::KinemaError;

/// Menu loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    /// Running the entry at this zero-based index
    Dispatching(usize),
    Exited,
}

/// Interpretation of one line of menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Exit,
    /// Zero-based entry index
    Select(usize),
    Invalid,
}

/// Classify a menu input line against a menu of `len` entries
pub fn parse_choice(input: &str, len: usize) -> Choice {
    let input = input.trim();
    if input == "0" {
        return Choice::Exit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Choice::Select(n - 1),
        _ => Choice::Invalid,
    }
}

/// Action run when an entry is chosen
pub type Action<'a> = Box<dyn FnMut(&mut Console<'_>) -> Result<(), KinemaError> + 'a>;

struct MenuEntry<'a> {
    label: String,
    action: Action<'a>,
}

pub struct Menu<'a> {
    title: String,
    prompt: String,
    exit_label: String,
    exit_message: Option<String>,
    invalid_message: String,
    entries: Vec<MenuEntry<'a>>,
    state: MenuState,
}

impl<'a> Menu<'a> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: "\nEnter your choice (number): ".to_string(),
            exit_label: "Return to main menu.".to_string(),
            exit_message: None,
            invalid_message: "Invalid choice. Please select a valid number.".to_string(),
            entries: Vec::new(),
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_exit_label(mut self, label: impl Into<String>) -> Self {
        self.exit_label = label.into();
        self
    }

    /// Line printed when the user picks `0`
    pub fn with_exit_message(mut self, message: impl Into<String>) -> Self {
        self.exit_message = Some(message.into());
        self
    }

    pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = message.into();
        self
    }

    pub fn entry<F>(mut self, label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Console<'_>) -> Result<(), KinemaError> + 'a,
    {
        self.entries.push(MenuEntry { label: label.into(), action: Box::new(action) });
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Print the title and the numbered entries
    pub fn render(&self, console: &mut Console<'_>) -> Result<(), KinemaError> {
        console.say("")?;
        console.say(&self.title)?;
        for (i, entry) in self.entries.iter().enumerate() {
            console.say(format!("{}. {}", i + 1, entry.label))?;
        }
        console.say(format!("0. {}", self.exit_label))
    }

    /// Render, read one line and act on it. Returns the state afterwards.
    ///
    /// Recoverable errors raised by an action are printed and the menu
    /// stays open; fatal ones are returned.
    pub fn step(&mut self, console: &mut Console<'_>) -> Result<MenuState, KinemaError> {
        if self.state == MenuState::Exited {
            return Ok(self.state);
        }

        self.render(console)?;
        let input = match console.prompt(&self.prompt)? {
            Some(line) => line,
            None => {
                tracing::info!(menu = %self.title, "input closed, leaving menu");
                self.state = MenuState::Exited;
                return Ok(self.state);
            }
        };

        match parse_choice(&input, self.entries.len()) {
            Choice::Exit => {
                if let Some(message) = &self.exit_message {
                    console.say(message)?;
                }
                self.state = MenuState::Exited;
            }
            Choice::Select(index) => {
                self.state = MenuState::Dispatching(index);
                let entry = &mut self.entries[index];
                tracing::debug!(menu = %self.title, entry = %entry.label, "dispatching");
                let outcome = (entry.action)(console);
                self.state = MenuState::AwaitingChoice;
                if let Err(err) = outcome {
                    if !err.is_recoverable() {
                        return Err(err);
                    }
                    tracing::warn!(code = %err.code, "{}", err.message);
                    report(console, &err)?;
                }
            }
            Choice::Invalid => {
                let err = KinemaError::invalid_selection(&input, self.entries.len());
                tracing::warn!(menu = %self.title, code = %err.code, "{}", err.message);
                console.say(&self.invalid_message)?;
            }
        }

        Ok(self.state)
    }

    /// Run until the user exits or input closes
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<(), KinemaError> {
        while self.step(console)? != MenuState::Exited {}
        Ok(())
    }
}

/// Print a recoverable error for the user
pub fn report(console: &mut Console<'_>, err: &KinemaError) -> Result<(), KinemaError> {
    console.say(format!("Error: {}", err.message))?;
    if let Some(suggestion) = &err.suggestion {
        console.say(format!("Hint: {}", suggestion))?;
    }
    Ok(())
}
