use super::*;

// =============================================================
// submit
// =============================================================

#[test]
fn short_question_is_rejected_without_mutation() {
    let mut state = AssistantState { input: "Hi".into(), ..AssistantState::default() };
    let err = state.submit("Hi").unwrap_err();

    assert_eq!(err, ValidationError::TooShort);
    assert!(state.messages.is_empty());
    assert!(!state.pending);
    assert_eq!(state.input, "Hi");
    assert_eq!(state.validation.as_deref(), Some("Please ask a more detailed question."));
}

#[test]
fn length_is_counted_after_trimming() {
    let mut state = AssistantState::default();
    assert_eq!(state.submit("   short    ").unwrap_err(), ValidationError::TooShort);
}

#[test]
fn length_is_counted_in_characters() {
    let mut state = AssistantState::default();
    // Nine characters, more than ten bytes.
    assert_eq!(state.submit("ÍPv6 ünïé").unwrap_err(), ValidationError::TooShort);
    assert!(state.submit("ÍPv6 ünïéx").is_ok());
}

#[test]
fn accepted_question_is_appended_and_input_cleared() {
    let mut state = AssistantState {
        input: "What is IPv6?".into(),
        validation: Some("stale".into()),
        ..AssistantState::default()
    };
    let ask = state.submit("  What is IPv6?  ").unwrap();

    assert_eq!(ask.question, "What is IPv6?");
    assert!(state.pending);
    assert!(state.input.is_empty());
    assert_eq!(state.validation, None);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, ask.message_id);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "What is IPv6?");
}

#[test]
fn submit_while_pending_is_busy() {
    let mut state = AssistantState::default();
    state.submit("What is IPv6?").unwrap();
    assert_eq!(state.submit("Why does my connection still use IPv4?").unwrap_err(), ValidationError::Busy);
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn success_appends_assistant_after_user() {
    let mut state = AssistantState::default();
    let ask = state.submit("What is IPv6?").unwrap();
    let toast = state.resolve(ask, Ok("IPv6 is a 128-bit addressing protocol...".into()));

    assert_eq!(toast, None);
    assert!(!state.pending);
    let transcript: Vec<_> = state.messages.iter().map(|m| (m.role, m.content.as_str())).collect();
    assert_eq!(
        transcript,
        vec![
            (Role::User, "What is IPv6?"),
            (Role::Assistant, "IPv6 is a 128-bit addressing protocol..."),
        ]
    );
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

#[test]
fn failure_restores_prior_transcript() {
    let mut state = AssistantState::default();
    let first = state.submit("What is IPv6?").unwrap();
    state.resolve(first, Ok("An addressing protocol.".into()));
    let before = state.messages.clone();

    let ask = state.submit("Why does my connection still use IPv4?").unwrap();
    let toast = state.resolve(ask, Err("Sorry, try later.".into()));

    assert_eq!(toast.as_deref(), Some("Sorry, try later."));
    assert_eq!(state.messages, before);
    assert!(!state.pending);
}

#[test]
fn failure_without_text_uses_unknown_error() {
    let mut state = AssistantState::default();
    let ask = state.submit("What is IPv6?").unwrap();
    assert_eq!(state.resolve(ask, Err(String::new())).as_deref(), Some(UNKNOWN_ERROR));
    assert!(state.messages.is_empty());
}

#[test]
fn rollback_targets_message_by_id() {
    let mut state = AssistantState::default();
    let ask = state.submit("What is IPv6?").unwrap();
    // A message appended after the user's must not be the one removed.
    state.messages.push(ChatMessage::new(Role::Assistant, "late".into()));

    state.resolve(ask.clone(), Err("boom".into()));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, "late");
    assert!(state.messages.iter().all(|m| m.id != ask.message_id));
}

#[test]
fn suggestions_only_while_empty() {
    let mut state = AssistantState::default();
    assert!(state.show_suggestions());
    state.submit(SUGGESTED_QUESTIONS[1]).unwrap();
    assert!(!state.show_suggestions());
}

#[test]
fn suggested_questions_pass_validation() {
    for q in SUGGESTED_QUESTIONS {
        assert!(q.chars().count() >= MIN_QUESTION_CHARS, "{q}");
    }
}

// =============================================================
// edit
// =============================================================

#[test]
fn edit_updates_input() {
    let mut state = AssistantState::default();
    state.edit("What is".into());
    assert_eq!(state.input, "What is");
    assert_eq!(state.validation, None);
}

#[test]
fn edit_keeps_validation_while_still_too_short() {
    let mut state = AssistantState::default();
    state.submit("Hi").unwrap_err();
    state.edit("Hi there".into());
    assert_eq!(state.validation.as_deref(), Some("Please ask a more detailed question."));
}

#[test]
fn edit_clears_validation_once_text_passes() {
    let mut state = AssistantState::default();
    state.submit("Hi").unwrap_err();
    state.edit("Hi, what is SLAAC?".into());
    assert_eq!(state.validation, None);
    assert!(state.messages.is_empty());
}
