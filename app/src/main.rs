//! Line-oriented front end for the demo page.
//!
//! Commands: `get` triggers the GET interaction, `name <value>` edits the
//! input buffer (`name` alone clears it), `send` submits it, `quit` exits.
//! The page is re-rendered after every command, with each message shown
//! only once its interaction has produced one.

use std::io::{self, BufRead, Write};

use hello_app::{HelloWorldApi, Page};

fn render(page: &Page) -> String {
    let mut out = String::new();
    out.push_str("== Test GET Request ==\n");
    out.push_str("  [get]  Get Hello World\n");
    if !page.get_message().is_empty() {
        out.push_str(&format!("  {}\n", page.get_message()));
    }
    out.push_str("== Test POST Request ==\n");
    out.push_str(&format!("  [name <value>]  name: {}\n", page.name()));
    out.push_str("  [send]  Send Hello World\n");
    if !page.post_message().is_empty() {
        out.push_str(&format!("  {}\n", page.post_message()));
    }
    out
}

/// What the loop does after an input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Help,
    Quit,
}

/// Apply one trimmed input line to the page.
fn dispatch(input: &str, page: &mut Page, api: &HelloWorldApi) -> Step {
    if input == "get" {
        page.fetch_greeting(api);
    } else if input == "send" {
        page.submit_name(api);
    } else if input == "name" {
        page.set_name("");
    } else if let Some(value) = input.strip_prefix("name ") {
        page.set_name(value.trim());
    } else if input == "quit" {
        return Step::Quit;
    } else if !input.is_empty() {
        return Step::Help;
    }
    Step::Continue
}

fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();
    let api = HelloWorldApi::from_env();
    let mut page = Page::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", render(&page))?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;

        match dispatch(line.trim(), &mut page, &api) {
            Step::Quit => break,
            Step::Help => {
                writeln!(stdout, "commands: get | name <value> | send | quit")?;
            }
            Step::Continue => {}
        }

        writeln!(stdout, "{}", render(&page))?;
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
