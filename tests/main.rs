#[macro_use]
extern crate assert_matches;

use rstest::rstest;
use sprig::*;

fn git() -> Component {
    make_command(
        "git",
        "The stupid content tracker.",
        vec![
            make_flag("version", "v", "Print the version.", vec![]),
            make_command(
                "clone",
                "Clone a repository.",
                vec![
                    make_flag("quiet", "q", "Operate quietly.", vec![]),
                    make_flag(
                        "branch",
                        "b",
                        "Check out this branch.",
                        vec![make_required_parameter("name", "", vec![])
                            .with_suggestions(Choices::new(["main", "develop"]))],
                    ),
                    make_required_parameter("repository", "Where to clone from.", vec![]),
                    make_parameter("directory", "Where to clone into.", vec![]),
                ],
            ),
            make_command("status", "Show the working tree status.", vec![]),
        ],
    )
}

#[test]
fn parse_round_trip() {
    let root = git();
    let result = parse(&root, "git  clone -q   -b develop url  dir").unwrap();

    assert_eq!(serialize_result(&result), "git clone -q -b develop url dir");
    let clone = result.find_named("clone").unwrap();
    assert_eq!(clone.find_named("repository").unwrap().value(), "url");
    assert_eq!(clone.find_named("directory").unwrap().value(), "dir");
    assert_eq!(clone.find_named("branch").unwrap().children()[0].value(), "develop");
    assert_eq!(result.last().value(), "dir");
}

#[rstest]
#[case("git status now", 2)]
#[case("git clone a b c", 4)]
fn parse_unconsumed(#[case] text: &str, #[case] expected_index: usize) {
    let root = git();

    assert_eq!(parse(&root, text), None);
    assert_matches!(try_parse(&root, text), Err(ParseError::Unconsumed { index, .. }) if index == expected_index);
}

#[test]
fn parse_errors() {
    let root = git();

    assert_matches!(try_parse(&root, ""), Err(ParseError::TokensExhausted));
    assert_matches!(try_parse(&root, "svn"), Err(ParseError::NoMatch { index: 0, .. }));
}

#[test]
fn parse_incomplete_keeps_prefix() {
    let root = git();
    let result = parse_incomplete(&root, "git status now").unwrap();

    assert_eq!(serialize_result(&result), "git status");
    assert_eq!(parse_incomplete(&root, "svn status"), None);
}

#[test]
fn parse_multi_roots() {
    let roots = vec![
        make_command("status", "", vec![]),
        make_command("stash", "", vec![make_command("pop", "", vec![])]),
    ];

    assert_eq!(parse_multi(&roots, "stash pop").unwrap().value(), "stash");
    assert_eq!(parse_multi(&roots, "status").unwrap().value(), "status");
    assert_eq!(parse_multi(&roots, "commit"), None);
    assert_matches!(
        try_parse_multi(&roots, "stash pop pop pop"),
        Ok(result) if result.children().len() == 3
    );
}

#[test]
fn context_incremental() {
    let root = git();
    let mut context = ParseContext::single(&root);

    assert_eq!(context.state(), ContextState::Empty);
    assert!(!context.is_complete());

    for token in tokenize("git clone -b main") {
        assert!(context.parse_token(token), "{token}");
    }

    assert_eq!(context.state(), ContextState::Open);
    assert_eq!(context.fed(), 4);
    // The repository is required.
    assert!(!context.is_complete());
    assert_eq!(context.next_suggestions(""), Vec::<String>::default());

    assert!(context.parse_token("url"));
    assert!(context.is_complete());
    assert_eq!(
        serialize_result(&context.root_parse_result().unwrap()),
        "git clone -b main url"
    );
    assert_eq!(context.next_suggestions("-"), vec!["--quiet", "--branch"]);
}

#[test]
fn context_stuck() {
    let root = git();
    let mut context = ParseContext::single(&root);

    assert!(context.parse_token("git"));
    assert!(context.parse_token("status"));
    assert_matches!(
        context.try_parse_token("extra"),
        Err(ParseError::ContextStuck { index: 2, .. })
    );
    assert_eq!(context.state(), ContextState::Closed);
    assert!(!context.parse_token("clone"));
    assert_eq!(
        serialize_result(&context.root_parse_result().unwrap()),
        "git status"
    );
}

#[rstest]
#[case("", vec!["git"])]
#[case("g", vec!["git"])]
#[case("x", vec![])]
#[case("git", vec!["git"])]
#[case("git ", vec!["--version", "clone", "status"])]
#[case("git s", vec!["status"])]
#[case("git -", vec!["--version"])]
#[case("git clone ", vec!["--quiet", "--branch"])]
#[case("git clone -b ", vec!["main", "develop"])]
#[case("git clone -b d", vec!["develop"])]
#[case("git clone -b main ", vec![])]
#[case("git clone -b main url ", vec!["--quiet", "--branch"])]
#[case("git status ", vec!["--version", "clone", "status"])]
#[case("git status now ", vec![])]
fn suggestions(#[case] text: &str, #[case] expected: Vec<&str>) {
    assert_eq!(next_token_suggestions(&git(), text), expected);
}

#[test]
fn suggestions_multi_roots() {
    let roots = vec![make_command("status", "", vec![]), make_command("stash", "", vec![])];

    assert_eq!(next_token_suggestions_multi(&roots, ""), vec!["status", "stash"]);
    assert_eq!(next_token_suggestions_multi(&roots, "sta"), vec!["status", "stash"]);
    assert_eq!(next_token_suggestions_multi(&roots, "stas"), vec!["stash"]);
}

#[test]
fn help() {
    let root = git();

    assert_eq!(
        generate_usage_string(&root),
        "usage: git [-v|--version] [clone [-q|--quiet] [-b|--branch NAME] REPOSITORY [DIRECTORY]] [status]"
    );

    let message = generate_help_string(&root, DEFAULT_MARGIN).unwrap();
    assert!(message.starts_with("usage: git"));
    assert!(message.contains("The stupid content tracker."));
    assert!(message.contains(" clone"));
    assert!(message.contains(" -v, --version"));

    assert_matches!(
        generate_help_string(&root, 1),
        Err(WidthError::TooNarrow { provided: 1, .. })
    );
}
