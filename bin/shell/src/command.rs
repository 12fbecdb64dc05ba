use clap::Parser;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(disable_version_flag = true)]
pub enum Command {
    #[command(about = "Register a new member", alias = "reg")]
    Register {
        #[arg(required = true)]
        email: String,
        #[arg(required = true)]
        name: String,
        #[arg(required = true)]
        phone: String,
        #[arg(long, help = "Prompted for when omitted")]
        password: Option<String>,
    },
    #[command(about = "Log in and keep the issued token", alias = "in")]
    Login {
        #[arg(required = true)]
        email: String,
        #[arg(long, help = "Prompted for when omitted")]
        password: Option<String>,
    },
    #[command(about = "Forget the current token", alias = "out")]
    Logout,
    #[command(about = "Show the member behind the current token", alias = "me")]
    Whoami,
    #[command(about = "Use a raw token or an Authorization header value from now on")]
    Token {
        #[arg(required = true, num_args = 1..)]
        value: Vec<String>,
    },
    #[command(about = "List every post", alias = "ls")]
    List,
    #[command(about = "Create a post", alias = "new")]
    Post {
        #[arg(required = true)]
        title: String,
        #[arg(required = true)]
        description: String,
    },
    #[command(about = "Replace a post's title and description")]
    Edit {
        #[arg(required = true)]
        id: u64,
        #[arg(required = true)]
        title: String,
        #[arg(required = true)]
        description: String,
    },
    #[command(about = "Delete a post", alias = "rm")]
    Delete {
        #[arg(required = true)]
        id: u64,
    },
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let words = words(line).ok_or("unbalanced quotes")?;
        Ok(Self::try_parse_from(std::iter::once("> ".to_string()).chain(words))?)
    }
}

/// Split on whitespace, keeping double-quoted runs together.
/// `None` when a quote is left open.
pub fn words(line: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut quoted = false;
    let mut started = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                started = true;
            }
            c if c.is_whitespace() && !quoted => {
                if started {
                    words.push(std::mem::take(&mut word));
                    started = false;
                }
            }
            c => {
                word.push(c);
                started = true;
            }
        }
    }
    if quoted {
        return None;
    }
    if started {
        words.push(word);
    }
    Some(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words() {
        assert_eq!(
            words("post  hello world"),
            Some(vec!["post".into(), "hello".into(), "world".into()])
        );
    }

    #[test]
    fn quoted_words() {
        assert_eq!(
            words(r#"post "hello there" "a longer body""#),
            Some(vec![
                "post".into(),
                "hello there".into(),
                "a longer body".into()
            ])
        );
        assert_eq!(words(r#"post "" d"#), Some(vec!["post".into(), "".into(), "d".into()]));
    }

    #[test]
    fn open_quote_rejected() {
        assert_eq!(words(r#"post "oops"#), None);
    }

    #[test]
    fn commands_parse() {
        assert_eq!(
            Command::parse_line("register a@x.com Ada 555-0100 --password p1").unwrap(),
            Command::Register {
                email: "a@x.com".into(),
                name: "Ada".into(),
                phone: "555-0100".into(),
                password: Some("p1".into()),
            }
        );
        assert_eq!(
            Command::parse_line(r#"edit 3 "new title" body"#).unwrap(),
            Command::Edit {
                id: 3,
                title: "new title".into(),
                description: "body".into(),
            }
        );
        assert_eq!(Command::parse_line("ls").unwrap(), Command::List);
        assert_eq!(
            Command::parse_line("rm 2").unwrap(),
            Command::Delete { id: 2 }
        );
    }

    #[test]
    fn bad_commands_rejected() {
        assert!(Command::parse_line("delete two").is_err());
        assert!(Command::parse_line("post only-a-title").is_err());
        assert!(Command::parse_line("fly").is_err());
    }
}
