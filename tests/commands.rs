use gemini_proxy::commands::{parse_slash_command, SlashCommand};

#[test]
fn plain_messages_are_not_commands() {
    assert_eq!(parse_slash_command("hello there"), None);
    assert_eq!(parse_slash_command(""), None);
    assert_eq!(parse_slash_command("what does /clear do?"), None);
}

#[test]
fn known_commands_parse() {
    assert_eq!(parse_slash_command("/help"), Some(SlashCommand::Help));
    assert_eq!(parse_slash_command("/clear"), Some(SlashCommand::Clear));
    assert_eq!(parse_slash_command("/quit"), Some(SlashCommand::Quit));
}

#[test]
fn commands_tolerate_surrounding_whitespace_and_arguments() {
    assert_eq!(parse_slash_command("  /quit  "), Some(SlashCommand::Quit));
    assert_eq!(
        parse_slash_command("/clear everything please"),
        Some(SlashCommand::Clear)
    );
}

#[test]
fn unknown_slash_input_is_reported_not_sent() {
    assert_eq!(
        parse_slash_command("/stream"),
        Some(SlashCommand::Unknown("/stream".to_string()))
    );
}
