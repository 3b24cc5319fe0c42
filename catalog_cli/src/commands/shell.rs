//! Interactive mode: one product table and one set of filters kept alive
//! across commands, like a page left open in a browser.

use std::io::Write;

use anyhow::Result;
use catalog_lib::creation::{create_product, CreateOutcome};
use catalog_lib::currency::CurrencyFormat;
use catalog_lib::detail::search_by_id;
use catalog_lib::render::TableStyle;
use catalog_lib::{
    Client, CollectionView, Config, FilterCriteria, Navbar, ProductForm, Session, SessionStorage,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::auth::navbar_line;

const HELP: &str = "\
Commands:
  load                              reload the product table
  set <field> <value>               set a filter (q, category, min_price, max_price,
                                    order_by_price, limit, offset)
  unset <field>                     clear a filter
  filters                           show the current filters
  get <id>                          show one product
  create <name> | <category> | <price>
  whoami                            show the session
  logout                            forget the session
  quit                              leave the shell";

#[derive(Debug, PartialEq)]
enum Command {
    Empty,
    Help,
    Load,
    Set(String, String),
    Unset(String),
    Filters,
    Get(String),
    Create(ProductForm),
    Whoami,
    Logout,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "help" | "?" => Command::Help,
        "load" | "list" => Command::Load,
        "set" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => Command::Set(field.to_string(), value.trim().to_string()),
            None => Command::Set(rest.to_string(), String::new()),
        },
        "unset" => Command::Unset(rest.to_string()),
        "filters" => Command::Filters,
        "get" => Command::Get(rest.to_string()),
        "create" => {
            let mut parts = rest.splitn(3, '|');
            Command::Create(ProductForm {
                name: parts.next().unwrap_or_default().to_string(),
                category: parts.next().unwrap_or_default().to_string(),
                price: parts.next().unwrap_or_default().to_string(),
            })
        }
        "whoami" => Command::Whoami,
        "logout" => Command::Logout,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

struct Shell {
    client: Client,
    criteria: FilterCriteria,
    view: CollectionView,
}

impl Shell {
    fn new(client: Client, currency: CurrencyFormat) -> Self {
        Self {
            client,
            criteria: FilterCriteria::default(),
            view: CollectionView::new(currency),
        }
    }

    async fn load(&mut self) -> String {
        match self.view.load_list(&self.client, &self.criteria).await {
            Ok(_) => self.view.render(TableStyle::Plain),
            Err(_) => self.view.error().unwrap_or_default().to_string(),
        }
    }

    async fn execute<S: SessionStorage>(&mut self, command: Command, session: &Session<S>) -> String {
        match command {
            Command::Empty | Command::Quit => String::new(),
            Command::Help => HELP.to_string(),
            Command::Load => self.load().await,
            Command::Set(field, value) => {
                if self.criteria.set(&field, &value) {
                    format!("{} = {:?}", field, value)
                } else {
                    format!("Unknown filter '{}'", field)
                }
            }
            Command::Unset(field) => {
                let cleared = if field == "order_by_price" {
                    self.criteria.set(&field, "false")
                } else {
                    self.criteria.set(&field, "")
                };
                if cleared {
                    format!("{} cleared", field)
                } else {
                    format!("Unknown filter '{}'", field)
                }
            }
            Command::Filters => format!("{:#?}", self.criteria),
            Command::Get(id) => search_by_id(&self.client, &id).await.message(),
            Command::Create(mut form) => {
                let outcome =
                    create_product(&self.client, &mut form, &mut self.view, &self.criteria).await;
                let mut out = outcome.message();
                if let CreateOutcome::Created(_) = outcome {
                    out.push('\n');
                    out.push_str(&match self.view.error() {
                        Some(message) => message.to_string(),
                        None => self.view.render(TableStyle::Plain),
                    });
                }
                out
            }
            Command::Whoami => navbar_line(&Navbar::from_session(session)),
            Command::Logout => match session.logout() {
                Ok(()) => {
                    self.client = self.client.clone().with_token("");
                    "Logged out. Run `catalog login` to sign in again.".to_string()
                }
                Err(e) => format!("Error: {}", e.user_message()),
            },
            Command::Unknown(verb) => format!("Unknown command '{}'. Type `help`.", verb),
        }
    }
}

pub async fn run<S: SessionStorage>(
    client: &Client,
    config: &Config,
    session: &Session<S>,
) -> Result<()> {
    let mut shell = Shell::new(client.clone(), config.currency());

    println!("{}", navbar_line(&Navbar::from_session(session)));
    println!("{}", shell.load().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = parse_command(&line);
        if command == Command::Quit {
            break;
        }
        let out = shell.execute(command, session).await;
        if !out.is_empty() {
            println!("{}", out);
        }
    }
    Ok(())
}
