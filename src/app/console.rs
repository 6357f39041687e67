use crate::app::screens;
use crate::core::session::Session;
use crate::domain::ports::DateSource;
use crate::utils::error::{Result, SkillBridgeError};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "skillbridge> ";

const HELP: &str = "\
Commands:
  login <email> <password>   sign in (any non-empty credentials)
  service <id>               design | web | content | other
  complexity <1-10>          complexity level
  hours <n>                  estimated hours
  rush <on|off>              rush order (+50%)
  book                       book the current estimate
  dashboard | calculator     switch screens
  logout                     end the session
  show | help | quit
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Service(String),
    Complexity(i64),
    Hours(f64),
    Rush(bool),
    Book,
    Dashboard,
    Calculator,
    Logout,
    Show,
    Help,
    Quit,
}

fn command_error(input: &str, reason: &str) -> SkillBridgeError {
    SkillBridgeError::CommandError {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for Command {
    type Err = SkillBridgeError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(Command::Show);
        };
        let arg = parts.next();

        let command = match keyword.to_ascii_lowercase().as_str() {
            // 缺少的欄位交給 Session 驗證，畫面會顯示提示
            "login" => {
                let password = parts.next().unwrap_or_default();
                if parts.next().is_some() {
                    return Err(command_error(line, "expected 'login <email> <password>'"));
                }
                Command::Login {
                    email: arg.unwrap_or_default().to_string(),
                    password: password.to_string(),
                }
            }
            "service" => {
                let id = arg.ok_or_else(|| command_error(line, "expected a service id"))?;
                Command::Service(id.to_string())
            }
            "complexity" => {
                let value = arg
                    .and_then(|v| v.parse::<i64>().ok())
                    .ok_or_else(|| command_error(line, "expected a whole number from 1 to 10"))?;
                Command::Complexity(value)
            }
            "hours" => {
                let value = arg
                    .and_then(|v| v.parse::<f64>().ok())
                    .ok_or_else(|| command_error(line, "expected a number of hours"))?;
                Command::Hours(value)
            }
            "rush" => match arg.map(|v| v.to_ascii_lowercase()).as_deref() {
                Some("on" | "yes" | "true") => Command::Rush(true),
                Some("off" | "no" | "false") => Command::Rush(false),
                _ => return Err(command_error(line, "expected 'on' or 'off'")),
            },
            "book" => Command::Book,
            "dashboard" => Command::Dashboard,
            "calculator" => Command::Calculator,
            "logout" => Command::Logout,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(command_error(line, "unknown command")),
        };

        Ok(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Render,
    Help,
    Quit,
}

/// Line-oriented front end over a [`Session`].
pub struct Console<D: DateSource> {
    session: Session<D>,
}

impl<D: DateSource> Console<D> {
    pub fn new(session: Session<D>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<D> {
        &self.session
    }

    pub fn into_session(self) -> Session<D> {
        self.session
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!("Console command: {:?}", command);
        match command {
            Command::Login { email, password } => self.session.login(&email, &password)?,
            Command::Service(id) => self.session.select_service(&id)?,
            Command::Complexity(level) => self.session.set_complexity(level)?,
            Command::Hours(hours) => self.session.set_hours(hours)?,
            Command::Rush(is_rush) => self.session.set_rush(is_rush)?,
            Command::Book => {
                self.session.book()?;
            }
            Command::Dashboard => self.session.open_dashboard()?,
            Command::Calculator => self.session.open_calculator()?,
            Command::Logout => self.session.logout(),
            Command::Show => {}
            Command::Help => return Ok(Outcome::Help),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Render)
    }

    /// Handles one input line and returns the text to display.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let command = line.parse::<Command>()?;
        match self.apply(command)? {
            Outcome::Render => Ok(Some(screens::render(&self.session))),
            Outcome::Help => Ok(Some(HELP.to_string())),
            Outcome::Quit => Ok(None),
        }
    }

    /// Runs until `quit` or end of input. Input mistakes are shown and the
    /// loop continues; only I/O failures end it early.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(screens::render(&self.session).as_bytes()).await?;
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let output = match self.execute(line.trim()) {
                Ok(Some(screen)) => screen,
                Ok(None) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Rejected input '{}': {}", line.trim(), e);
                    format!("! {}\n", e.user_friendly_message())
                }
                Err(e) => return Err(e),
            };

            writer.write_all(output.as_bytes()).await?;
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;
        }

        writer.write_all(b"\nGoodbye!\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
