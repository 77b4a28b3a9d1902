use owo_colors::{OwoColorize, Stream, Style};

const TITLE: &str = r"
 _   _           _        _ ____
| \ | | ___   __| | ___  | / ___|    __ _ _ __  _ __
|  \| |/ _ \ / _` |/ _ \ | \___ \   / _` | '_ \| '_ \
| |\  | (_) | (_| |  __/ |_|___) | | (_| | |_) | |_) |
|_| \_|\___/ \__,_|\___\___/|____/   \__,_| .__/| .__/
                                          |_|   |_|
  ____                           _
 / ___| ___ _ __   ___ _ __ __ _| |_ ___  _ __
| |  _ / _ \ '_ \ / _ \ '__/ _` | __/ _ \| '__|
| |_| |  __/ | | |  __/ | | (_| | || (_) | |
 \____|\___|_| |_|\___|_|  \__,_|\__\___/|_|
";

const RULE: &str = "---------------------------------------------------------";

const ABOUT: &str = "This is a CLI to generate a boilerplate
  for quick starting a NodeJS app using Express, Typescript
  and other many commonly used tools to create NodeJS REST or GraphQL APIs.";

fn blue(s: &str) -> String {
    s.if_supports_color(Stream::Stdout, |s| s.style(Style::new().blue()))
        .to_string()
}

/// Prints the title, author and a short description of the generator.
pub fn welcome() {
    println!("{}", blue(TITLE));
    println!("{}", blue(&format!("\n{RULE}")));
    println!(
        "{}",
        blue("    Author: Djibril ISSOUFOU - github.com/djibril6")
    );
    println!("{}", blue(&format!("{RULE}\n")));
    println!("{ABOUT}\n");
}
