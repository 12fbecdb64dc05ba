use crate::command::Command;
use anyhow::anyhow;
use colored::Colorize;
use quill_core::Unique;
use quill_service::*;
use std::io::Write;

/// Read-eval loop over one [`Quill`]. Holds the token of whoever last
/// logged in and presents it on every protected command.
pub struct Shell {
    quill: Quill,
    token: Option<String>,
}

impl From<Quill> for Shell {
    fn from(quill: Quill) -> Self {
        Self { quill, token: None }
    }
}

impl Shell {
    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("entering shell");
        println!("{}", "state is in memory only and is lost on exit".dimmed());
        loop {
            print!("{} ", ">".bold());
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match self.handle(line) {
                    Err(e) => eprintln!("{}", e.to_string().red()),
                    Ok(()) => continue,
                },
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> anyhow::Result<()> {
        match Command::parse_line(line).map_err(|e| anyhow!("{}", e))? {
            Command::Register {
                email,
                name,
                phone,
                password,
            } => {
                let password = Self::secret(password, true)?;
                let member = self.quill.register(RegisterRequest {
                    email,
                    name,
                    phone,
                    password,
                })?;
                Ok(println!("{}", serde_json::to_string_pretty(&member)?))
            }
            Command::Login { email, password } => {
                let password = Self::secret(password, false)?;
                let response = self.quill.login(LoginRequest {
                    username: email,
                    password,
                })?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                self.token = Some(response.access_token);
                Ok(())
            }
            Command::Logout => {
                self.token = None;
                Ok(println!("{}", "token forgotten".dimmed()))
            }
            Command::Whoami => {
                let member = self.quill.whoami(self.token()?)?;
                Ok(println!("{}", member))
            }
            Command::Token { value } => {
                let value = value.join(" ");
                let token = quill_auth::bearer(&value).unwrap_or(value.as_str());
                let subject = self.quill.authorize(token);
                self.token = Some(token.to_string());
                match subject {
                    Ok(subject) => Ok(println!("token for {}", subject.email())),
                    Err(e) => Ok(println!("{} {}", "token stored but rejected:".yellow(), e)),
                }
            }
            Command::List => {
                let listing = self
                    .quill
                    .posts()
                    .iter()
                    .map(|post| {
                        format!(
                            " {:>4}  {}  {}",
                            post.id(),
                            post.title().bold(),
                            post.description()
                        )
                    })
                    .collect::<Vec<String>>()
                    .join("\n");
                match listing.as_str() {
                    "" => Ok(println!("{}", "no posts".dimmed())),
                    _ => Ok(println!("{}", listing)),
                }
            }
            Command::Post { title, description } => {
                let post = self
                    .quill
                    .create(self.token()?, PostRequest { title, description })?;
                Ok(println!("{} {}", "created".green(), post))
            }
            Command::Edit {
                id,
                title,
                description,
            } => {
                let post =
                    self.quill
                        .update(self.token()?, id.into(), PostRequest { title, description })?;
                Ok(println!("{} {}", "updated".green(), post))
            }
            Command::Delete { id } => {
                self.quill.delete(self.token()?, id.into())?;
                Ok(println!("{} #{}", "deleted".green(), id))
            }
        }
    }

    fn token(&self) -> anyhow::Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| anyhow!("not logged in (use `login` or `token`)"))
    }

    fn secret(given: Option<String>, confirm: bool) -> anyhow::Result<String> {
        if let Some(password) = given {
            return Ok(password);
        }
        let prompt = dialoguer::Password::new().with_prompt("password");
        let prompt = match confirm {
            true => prompt.with_confirmation("repeat password", "passwords do not match"),
            false => prompt,
        };
        Ok(prompt.interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::from(Quill::new(Config::new("shell secret")))
    }

    #[test]
    fn full_session() {
        let mut shell = shell();
        shell
            .handle("register a@x.com Ada 555-0100 --password p1")
            .unwrap();
        assert!(shell.handle("post t d").is_err());
        shell.handle("login a@x.com --password p1").unwrap();
        assert!(shell.token.is_some());
        shell.handle(r#"post "first post" "hello world""#).unwrap();
        shell.handle("post second d").unwrap();
        shell.handle("rm 1").unwrap();
        shell.handle("post third d").unwrap();
        let ids = shell
            .quill
            .posts()
            .iter()
            .map(|p| p.id().inner())
            .collect::<Vec<u64>>();
        assert_eq!(ids, vec![2, 3]);
        shell.handle("edit 2 renamed body").unwrap();
        assert_eq!(shell.quill.posts()[0].title(), "renamed");
        assert!(shell.handle("rm 9").is_err());
        shell.handle("logout").unwrap();
        assert!(shell.handle("whoami").is_err());
    }

    #[test]
    fn wrong_password_keeps_no_token() {
        let mut shell = shell();
        shell
            .handle("register a@x.com Ada 555-0100 --password p1")
            .unwrap();
        assert!(shell.handle("login a@x.com --password nope").is_err());
        assert!(shell.token.is_none());
    }

    #[test]
    fn token_accepts_header_form() {
        let mut shell = shell();
        shell
            .handle("register a@x.com Ada 555-0100 --password p1")
            .unwrap();
        shell.handle("login a@x.com --password p1").unwrap();
        let raw = shell.token.clone().unwrap();
        shell.handle("logout").unwrap();
        shell.handle(&format!("token Bearer {}", raw)).unwrap();
        assert_eq!(shell.token.as_deref(), Some(raw.as_str()));
        assert!(shell.handle("whoami").is_ok());
    }
}
