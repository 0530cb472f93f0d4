use crate::form::DraftField;
use crate::store::RecipeStore;
use crate::view;
use crate::workspace::Workspace;
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Commands:
  search <text>         filter recipes (blank clears the search)
  select <id>           show a recipe in the detail panel
  set <field> <value>   fill a form field (title, cuisine, time, difficulty,
                        servings, tags, ingredients, instructions)
  submit                add the drafted recipe
  reload                fetch the recipe list again
  show                  print the page
  help                  print this help
  quit                  leave
";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Select(String),
    Set(DraftField, String),
    Submit,
    Reload,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "select" | "view" => {
                if rest.is_empty() {
                    Err("select needs a recipe id".to_string())
                } else {
                    Ok(Command::Select(rest.to_string()))
                }
            }
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("set needs a field name".to_string());
                }
                Ok(Command::Set(field.parse()?, value.trim().to_string()))
            }
            "submit" | "add" => Ok(Command::Submit),
            "reload" => Ok(Command::Reload),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}', try 'help'", other)),
        }
    }
}

/// Read commands until `quit` or end of input, printing the page after each action
pub async fn run<S, R, W>(
    ws: &mut Workspace,
    store: &S,
    mut input: R,
    mut output: W,
) -> std::io::Result<()>
where
    S: RecipeStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(view::render_page(ws).as_bytes()).await?;

    let mut line = String::new();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                output.write_all(format!("{}\n", message).as_bytes()).await?;
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        let reply = match command {
            Command::Quit => break,
            Command::Help => HELP.to_string(),
            Command::Show => view::render_page(ws),
            Command::Search(query) => {
                ws.set_query(query);
                view::render_page(ws)
            }
            Command::Select(id) => {
                ws.select_input(&id);
                view::render_page(ws)
            }
            Command::Set(field, value) => {
                ws.update_field(field, value);
                view::render_form(ws.draft(), ws.is_saving())
            }
            Command::Reload => {
                ws.load(store).await;
                view::render_page(ws)
            }
            Command::Submit => match ws.submit(store).await {
                Ok(true) => format!("Recipe added.\n{}", view::render_page(ws)),
                Ok(false) => view::render_page(ws),
                Err(e) => format!("{}\n", e),
            },
        };
        output.write_all(reply.as_bytes()).await?;
    }

    output.flush().await
}
