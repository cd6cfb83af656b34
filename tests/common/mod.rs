#![allow(dead_code)]

use anyhow::Result;
use pantheon_sync::command_utils::CommandRunner;
use pantheon_sync::config::Config;
use pantheon_sync::prompt::Prompt;
use std::cell::RefCell;
use std::fs;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{ExitStatus, Output};

pub const SQL_CONF: &str =
    r#"{"driver":"mysql","database":"drupal","host":"127.0.0.1","port":3306,"username":"drupal"}"#;

pub fn output(code: i32, stdout: &str) -> Output {
    Output {
        status: ExitStatus::from_raw(code << 8),
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

type Handler = Box<dyn Fn(&str, &[String]) -> Result<Output>>;

/// Records every call and answers with a scripted handler.
pub struct FakeRunner {
    calls: RefCell<Vec<(String, Vec<String>)>>,
    handler: Handler,
}

impl FakeRunner {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &[String]) -> Result<Output> + 'static,
    {
        Self {
            calls: RefCell::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    /// Behaves like a working terminus, curl and drush.
    pub fn happy() -> Self {
        Self::new(happy_handler)
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, program: &str, first_arg: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|(p, args)| p == program && args.iter().any(|a| a == first_arg))
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        (self.handler)(program, args)
    }
}

pub fn happy_handler(program: &str, args: &[String]) -> Result<Output> {
    match program {
        "terminus" => match args[0].as_str() {
            "backup:get" => Ok(output(0, "https://backups.example.test/db.sql.gz\n")),
            _ => Ok(output(0, "")),
        },
        "curl" => {
            let dest = option_value(args, "--output").expect("curl called without --output");
            fs::write(dest, b"\x1f\x8bfake-gzip")?;
            Ok(output(0, ""))
        }
        "drush" => drush_handler(args),
        other => panic!("unexpected program {}", other),
    }
}

pub fn drush_handler(args: &[String]) -> Result<Output> {
    if args.iter().any(|a| a == "sql:conf") {
        return Ok(output(0, SQL_CONF));
    }
    if args.iter().any(|a| a == "sql:query") && args.iter().any(|a| a == "--file-delete") {
        if let Some(file) = args.iter().find_map(|a| a.strip_prefix("--file=")) {
            let _ = fs::remove_file(file);
        }
    }
    Ok(output(0, ""))
}

fn option_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Answers every confirmation with a fixed reply and remembers the prompts.
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.answer)
    }
}

pub fn test_config(temp_dir: &Path) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.temp_dir = temp_dir.to_path_buf();
    config
}
