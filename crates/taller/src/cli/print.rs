use colored::Colorize;
use std::fmt::Display;
use tallerapp::api::{CmdMessage, MessageLevel};
use tallerapp::model::{Tool, User};

const SEPARATOR: &str = "--------------------";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(error: &dyn Display) {
    println!("{}", format!("Error: {error}").red());
}

pub fn print_users(users: &[User]) {
    for user in users {
        print!("{user}");
        println!("{SEPARATOR}");
    }
}

pub fn print_tools(tools: &[Tool]) {
    for tool in tools {
        print!("{tool}");
        println!("{SEPARATOR}");
    }
}
