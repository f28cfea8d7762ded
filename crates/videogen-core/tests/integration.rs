//! End-to-end tests of the landing page logic.
//!
//! Each test drives the prompt form the way the page does: type, submit, let
//! the timers run, and check what the visitor would see.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use videogen_core::{
    ContactForm, ContactSubmission, ManualScheduler, Phase, PromptForm, RecordingSink,
    SubmitOutcome, TokioScheduler,
};
use videogen_types::{content, GenerationState, LandingError, NotificationVariant};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A prompt form on a virtual clock, with every rendered state recorded.
struct Page {
    clock: ManualScheduler,
    sink: Rc<RecordingSink>,
    form: PromptForm<ManualScheduler>,
    rendered: Rc<RefCell<Vec<(Duration, GenerationState)>>>,
}

fn page() -> Page {
    let clock = ManualScheduler::new();
    let sink = Rc::new(RecordingSink::new());
    let form = PromptForm::open(clock.clone(), sink.clone());
    let rendered = Rc::new(RefCell::new(Vec::new()));

    let log = rendered.clone();
    let at = clock.clone();
    form.driver()
        .on_change(move |state| log.borrow_mut().push((at.now(), state)));

    Page {
        clock,
        sink,
        form,
        rendered,
    }
}

// ---------------------------------------------------------------------------
// Prompt form
// ---------------------------------------------------------------------------

#[test]
fn blank_submit_never_runs() {
    let p = page();
    p.form.set_prompt("    ");
    assert!(matches!(p.form.submit(), Err(LandingError::BlankPrompt)));

    p.clock.advance(ms(20_000));
    assert!(p.rendered.borrow().is_empty());
    assert_eq!(p.sink.len(), 1);
    assert_eq!(
        p.sink.notifications()[0].variant,
        NotificationVariant::Destructive
    );
}

#[test]
fn full_cycle_matches_the_timeline() {
    let p = page();
    p.form.set_prompt("A sunset on the ocean shore, gulls overhead");
    assert_eq!(p.form.submit().unwrap(), SubmitOutcome::Started);

    // Observable immediately.
    assert_eq!(
        p.form.state(),
        GenerationState {
            is_generating: true,
            progress: 0
        }
    );

    p.clock.advance_to(ms(7_999));
    assert_eq!(p.form.state().progress, 90);
    assert_eq!(p.form.driver().phase(), Phase::Running);

    p.clock.advance_to(ms(8_000));
    assert_eq!(p.form.state().progress, 100);
    assert!(p.form.state().is_generating);

    p.clock.advance_to(ms(8_499));
    assert!(p.sink.is_empty());

    p.clock.advance_to(ms(8_500));
    assert_eq!(p.form.state(), GenerationState::IDLE);
    assert_eq!(p.sink.notifications(), vec![content::video_ready_notice()]);
    assert_eq!(p.clock.pending(), 0);
}

#[test]
fn progress_is_monotonic_and_ticker_never_passes_ninety() {
    let p = page();
    p.form.set_prompt("mountains");
    p.form.submit().unwrap();
    p.clock.advance(ms(8_500));

    let rendered = p.rendered.borrow();
    let running: Vec<_> = rendered
        .iter()
        .filter(|(at, s)| *at < ms(8_000) && s.is_generating)
        .map(|(_, s)| s.progress)
        .collect();
    assert!(running.windows(2).all(|w| w[0] <= w[1]));
    assert!(running.iter().all(|p| *p <= 90));
    assert_eq!(running.last(), Some(&90));

    let (at, last) = *rendered.last().unwrap();
    assert_eq!(at, ms(8_500));
    assert_eq!(last, GenerationState::IDLE);
}

#[test]
fn double_submit_starts_one_cycle() {
    let p = page();
    p.form.set_prompt("rain on a window");
    p.form.submit().unwrap();
    p.clock.advance(ms(3_000));
    assert_eq!(p.form.submit().unwrap(), SubmitOutcome::AlreadyRunning);
    p.clock.advance(ms(3_000));
    assert_eq!(p.form.submit().unwrap(), SubmitOutcome::AlreadyRunning);

    p.clock.advance(ms(30_000));
    assert_eq!(p.sink.len(), 1);
    let completions = p
        .rendered
        .borrow()
        .iter()
        .filter(|(_, s)| s.progress == 100)
        .count();
    assert_eq!(completions, 1);
}

#[test]
fn teardown_mid_cycle_stops_everything() {
    let p = page();
    p.form.set_prompt("desert caravan");
    p.form.submit().unwrap();
    p.clock.advance(ms(4_000));
    let seen = p.rendered.borrow().len();

    drop(p.form);
    assert_eq!(p.clock.pending(), 0);
    p.clock.advance(ms(10_000));
    assert_eq!(p.rendered.borrow().len(), seen);
    assert!(p.sink.is_empty());
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[test]
fn contact_form_is_independent_of_prompt_form() {
    let p = page();
    let contact = ContactForm::new(p.sink.clone());

    p.form.set_prompt("northern lights");
    p.form.submit().unwrap();
    contact
        .submit(ContactSubmission {
            name: "Ivan".into(),
            email: "ivan@example.com".into(),
            message: "Pricing?".into(),
        })
        .unwrap();

    assert_eq!(p.sink.notifications(), vec![content::message_sent_notice()]);
    assert!(p.form.state().is_generating);

    p.clock.advance(ms(8_500));
    assert_eq!(p.sink.len(), 2);
}

// ---------------------------------------------------------------------------
// Real timers
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn tokio_timers_drive_a_full_cycle() {
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let sink = Rc::new(RecordingSink::new());
            let form = PromptForm::open(TokioScheduler, sink.clone());
            form.set_prompt("timelapse of a city");
            form.submit().unwrap();

            tokio::time::sleep(ms(4_050)).await;
            assert_eq!(form.state().progress, 50);

            tokio::time::sleep(ms(4_000)).await;
            assert_eq!(form.state().progress, 100);

            tokio::time::sleep(ms(500)).await;
            assert_eq!(form.state(), GenerationState::IDLE);
            assert_eq!(sink.notifications(), vec![content::video_ready_notice()]);
        })
        .await;
}
