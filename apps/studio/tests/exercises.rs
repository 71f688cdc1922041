mod common;

use common::{capitals_form, no, yes, TestContext};
use listening_core::{ListView, EMPTY_LIST_MESSAGE};
use listening_studio::audio::AudioInput;
use listening_studio::commands::{
    clear_all, create_exercise, delete_exercise, list_exercises, CreateOutcome, ExerciseForm,
};
use pretty_assertions::assert_eq;

fn created(outcome: CreateOutcome) -> listening_core::Exercise {
    match outcome {
        CreateOutcome::Created(exercise) => exercise,
        CreateOutcome::Cancelled => panic!("expected exercise to be created"),
    }
}

#[test]
fn test_create_and_list() {
    let ctx = TestContext::new();
    let exercise = created(create_exercise(&ctx.state, capitals_form(), &mut no).unwrap());

    assert_eq!(exercise.title, "World capitals");
    assert_eq!(exercise.answers, vec!["Paris", "42"]);
    assert_eq!(exercise.blank_count(), 2);

    let ListView::Cards(cards) = list_exercises(&ctx.state).unwrap() else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, exercise.id);
    assert_eq!(cards[0].slots(), vec![0, 1]);
}

#[test]
fn test_empty_list_message() {
    let ctx = TestContext::new();
    assert_eq!(
        list_exercises(&ctx.state).unwrap(),
        ListView::Empty {
            message: EMPTY_LIST_MESSAGE
        }
    );
}

#[test]
fn test_missing_fields_rejected() {
    let ctx = TestContext::new();
    let form = ExerciseForm {
        title: "   ".into(),
        ..capitals_form()
    };
    let err = create_exercise(&ctx.state, form, &mut yes).unwrap_err();
    assert_eq!(err.message, "Please fill in at least the title and transcript.");
}

#[test]
fn test_mismatch_needs_confirmation() {
    let ctx = TestContext::new();
    let form = ExerciseForm {
        answers: "Paris".into(),
        ..capitals_form()
    };

    let mut prompts = Vec::new();
    let mut decline = |p: &str| {
        prompts.push(p.to_string());
        false
    };
    let outcome = create_exercise(&ctx.state, form.clone(), &mut decline).unwrap();
    assert_eq!(outcome, CreateOutcome::Cancelled);
    assert_eq!(
        prompts,
        vec!["You marked 2 blanks but entered 1 answers.\nSave anyway?".to_string()]
    );
    assert!(matches!(
        list_exercises(&ctx.state).unwrap(),
        ListView::Empty { .. }
    ));

    let exercise = created(create_exercise(&ctx.state, form, &mut yes).unwrap());
    assert!(exercise.answers_mismatch());
}

#[test]
fn test_transcript_is_escaped() {
    let ctx = TestContext::new();
    let form = ExerciseForm {
        transcript: r#"<script>alert("x")</script> & {{blank}}"#.into(),
        answers: "a".into(),
        ..capitals_form()
    };
    let exercise = created(create_exercise(&ctx.state, form, &mut no).unwrap());
    assert!(!exercise.transcript_html.contains("<script>"));
    assert!(exercise
        .transcript_html
        .starts_with("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; "));
}

#[test]
fn test_file_audio_takes_priority_and_is_released_on_delete() {
    let ctx = TestContext::new();
    let form = ExerciseForm {
        audio: AudioInput::File {
            bytes: vec![1, 2, 3],
            mime: "audio/mpeg".into(),
        },
        ..capitals_form()
    };
    let exercise = created(create_exercise(&ctx.state, form, &mut no).unwrap());
    assert!(exercise.has_session_audio());
    assert!(ctx
        .state
        .collection
        .lock()
        .unwrap()
        .audio()
        .resolve(&exercise.audio_url)
        .is_some());

    assert!(delete_exercise(&ctx.state, &exercise.id, &mut yes).unwrap());
    assert!(ctx.state.collection.lock().unwrap().audio().is_empty());
}

#[test]
fn test_url_audio_is_trimmed() {
    let ctx = TestContext::new();
    let form = ExerciseForm {
        audio: AudioInput::Url(" https://example.com/clip.mp3 ".into()),
        ..capitals_form()
    };
    let exercise = created(create_exercise(&ctx.state, form, &mut no).unwrap());
    assert_eq!(exercise.audio_url, "https://example.com/clip.mp3");
}

#[test]
fn test_delete_requires_confirmation() {
    let ctx = TestContext::new();
    let exercise = created(create_exercise(&ctx.state, capitals_form(), &mut no).unwrap());

    assert!(!delete_exercise(&ctx.state, &exercise.id, &mut no).unwrap());
    assert_eq!(ctx.state.collection.lock().unwrap().len(), 1);

    assert!(delete_exercise(&ctx.state, &exercise.id, &mut yes).unwrap());
    assert!(!delete_exercise(&ctx.state, &exercise.id, &mut yes).unwrap());
}

#[test]
fn test_clear_all() {
    let ctx = TestContext::new();
    create_exercise(&ctx.state, capitals_form(), &mut no).unwrap();
    create_exercise(&ctx.state, capitals_form(), &mut no).unwrap();

    assert!(!clear_all(&ctx.state, &mut no).unwrap());
    assert_eq!(ctx.state.collection.lock().unwrap().len(), 2);

    assert!(clear_all(&ctx.state, &mut yes).unwrap());
    let ctx = ctx.reopen();
    assert!(ctx.state.collection.lock().unwrap().is_empty());
}

#[test]
fn test_collection_survives_reopen() {
    let ctx = TestContext::new();
    let first = created(create_exercise(&ctx.state, capitals_form(), &mut no).unwrap());
    let second = created(
        create_exercise(
            &ctx.state,
            ExerciseForm {
                title: "Second".into(),
                ..capitals_form()
            },
            &mut no,
        )
        .unwrap(),
    );

    let ctx = ctx.reopen();
    let collection = ctx.state.collection.lock().unwrap();
    assert_eq!(collection.exercises(), &[first, second][..]);
}
