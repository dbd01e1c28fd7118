use typedrill::config::Config;
use typedrill::{GeneratorKind, PracticeController, TypingSession};

// Headless practice flow driven through the controller, one keystroke snapshot at a time.
#[test]
fn keystroke_flow_completes() {
    let mut controller = PracticeController::new(Config {
        seed: Some(2024),
        word_count: 3,
        ..Config::default()
    })
    .unwrap();

    let prompt = controller.next_prompt();
    assert_eq!(prompt.split(' ').count(), 3);

    controller.start_session(prompt.clone());
    assert!(controller.is_running());

    let mut typed = String::new();
    for c in prompt.chars() {
        assert!(!controller.is_finished());
        typed.push(c);
        controller.update_input(&typed);
        assert_eq!(controller.accuracy(), 100.0);
    }

    assert!(controller.is_finished());
    let summary = controller.finish();
    assert_eq!(summary.accuracy, 100.0);
    assert_eq!(summary.correct_chars, prompt.chars().count());
    assert_eq!(summary.total_chars, summary.correct_chars);
    assert!(summary.elapsed_secs >= 0.0);
}

#[test]
fn backspace_corrects_accuracy() {
    let mut controller = PracticeController::new(Config::default()).unwrap();
    controller.start_session("hello");

    controller.update_input("hx");
    assert_eq!(controller.accuracy(), 50.0);

    controller.update_input("h");
    controller.update_input("he");
    assert_eq!(controller.accuracy(), 100.0);
    assert_eq!(controller.session().correct_chars(), 2);
}

#[test]
fn every_generator_kind_produces_catalog_tokens() {
    let mut controller = PracticeController::new(Config {
        seed: Some(1),
        ..Config::default()
    })
    .unwrap();

    for (kind, count) in [
        (GeneratorKind::RandomWords, 12),
        (GeneratorKind::MixedCase, 12),
    ] {
        controller.set_generator_kind(kind).unwrap();
        let text = controller.generate_text(count);
        assert_eq!(text.split(' ').count(), count as usize);
        assert!(text.split(' ').all(|t| !t.is_empty() && t.chars().count() <= 6));
    }

    controller.set_generator_kind(GeneratorKind::Sentences).unwrap();
    let text = controller.generate_text(2);
    assert_eq!(text.matches(". ").count(), 1);

    for kind in [
        GeneratorKind::RandomWords,
        GeneratorKind::Sentences,
        GeneratorKind::MixedCase,
    ] {
        controller.set_generator_kind(kind).unwrap();
        assert_eq!(controller.generate_text(0), "");
        assert_eq!(controller.generate_text(-1), "");
    }
}

#[test]
fn reset_then_reads_are_idle_values() {
    let mut controller = PracticeController::new(Config::default()).unwrap();
    controller.start_session("abcde");
    controller.update_input("abcde");
    assert!(controller.wpm(6.0) > 0);

    controller.reset_session();

    assert_eq!(controller.accuracy(), 100.0);
    assert_eq!(controller.wpm(30.0), 0);
    assert!(!controller.is_running());
    assert_eq!(*controller.session(), TypingSession::new());
}

#[test]
fn session_standalone_properties() {
    let mut session = TypingSession::new();
    session.start_session("hello");
    session.update_input("hello world");

    assert_eq!(session.correct_chars(), 5);
    assert_eq!(session.total_chars(), 11);
    assert!((session.accuracy() - 500.0 / 11.0).abs() < 1e-9);
    assert_eq!(session.wpm(0.0), 0);
    assert_eq!(session.wpm(-5.0), 0);
}
