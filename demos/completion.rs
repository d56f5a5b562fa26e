use sprig::*;

fn grammar() -> Component {
    make_command(
        "git",
        "A tiny slice of git.",
        vec![
            make_flag("help", "h", "Show this help message and exit.", vec![]),
            make_command(
                "clone",
                "Clone a repository into a new directory.",
                vec![
                    make_flag("quiet", "q", "Operate quietly.", vec![]),
                    make_required_parameter("repository", "The repository to clone from.", vec![]),
                    make_parameter("directory", "The directory to clone into.", vec![]),
                ],
            ),
            make_command(
                "checkout",
                "Switch branches.",
                vec![make_required_parameter("branch", "The branch to switch to.", vec![])
                    .with_suggestions(Choices::new(["main", "develop", "release"]))],
            ),
            make_command(
                "commit",
                "Record changes to the repository.",
                vec![
                    make_flag(
                        "message",
                        "m",
                        "Use the given message.",
                        vec![make_required_parameter("msg", "", vec![])],
                    ),
                    make_flag("amend", "", "Replace the tip of the current branch.", vec![]),
                ],
            ),
        ],
    )
}

fn main() {
    let root = grammar();
    // Everything after the program name is the (possibly partial) line being completed.
    let line = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let line = format!("git {line}");

    match try_parse(&root, &line) {
        Ok(result) => {
            if result.find_named("help").is_some() {
                match generate_help_string(&root, DEFAULT_MARGIN) {
                    Ok(help) => println!("{help}"),
                    Err(error) => eprintln!("{error}"),
                }
                return;
            }

            println!("Parsed: {}", serialize_result(&result));
        }
        Err(error) => println!("Incomplete: {error}"),
    }

    for suggestion in next_token_suggestions(&root, &line) {
        println!("  {suggestion}");
    }
}
