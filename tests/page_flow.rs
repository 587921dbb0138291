//! Lobby -> coin drop -> content page, with in-memory collaborators

use std::cell::RefCell;
use std::rc::Rc;

use arcade_pd::anim::{CoinDropAnimation, Completion, PlayOutcome, RecordingSurface, Schedule};
use arcade_pd::catalog::{self, DOMAINS, DomainId};
use arcade_pd::platform::{ManualClock, MemoryStorage};
use arcade_pd::tuning::CoinTuning;
use arcade_pd::ui::labels;
use arcade_pd::{Navigation, ProgressPresenter, ProgressStore, SettingKey};
use chrono::DateTime;

fn store() -> ProgressStore<MemoryStorage, ManualClock> {
    let clock = ManualClock::new(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
    ProgressStore::new(MemoryStorage::new(), clock)
}

fn run_to_idle(anim: &mut CoinDropAnimation<RecordingSurface>, mut next: Schedule) {
    let mut now = 0.0;
    loop {
        match next {
            Schedule::Frame => now += 16.0,
            Schedule::Timer { delay_ms } => now += delay_ms,
            Schedule::Idle => return,
        }
        next = anim.advance(now);
    }
}

#[test]
fn first_lobby_visit_then_resume_domain() {
    let store = store();
    store.init().unwrap();
    let nav = Navigation::default();

    // First lobby visit shows the banner once
    assert_eq!(store.get_setting(SettingKey::VisitedLobby), Some(false));
    store.set_setting(SettingKey::VisitedLobby, true).unwrap();
    assert_eq!(store.get_setting(SettingKey::VisitedLobby), Some(true));

    // Visit a few pages in domain 2
    for page in [1, 2, 3] {
        let data = catalog::resolve_page(DomainId(2), page).unwrap();
        store.mark_page_completed(data.domain_num, data.page_num).unwrap();
    }

    // Back in the lobby, the cabinet shows the progress
    let presenter = ProgressPresenter::new(&store);
    let info = DomainId(2).info().unwrap();
    let summary = presenter.cabinet_summary(info.id, info.total_pages);
    assert_eq!(labels::cabinet_text(&summary), "3 / 39");
    assert_eq!(labels::fill_width(summary.percent), "8%");

    // Clicking the cabinet plays the coin drop, then resumes at page 3
    let destination = Rc::new(RefCell::new(None));
    let target = nav.domain_url(DomainId(2), presenter.resume_page(DomainId(2)));
    let sink = destination.clone();
    let done: Completion = Box::new(move || *sink.borrow_mut() = Some(target));

    let mut anim = CoinDropAnimation::new(RecordingSurface::new(1024.0, 768.0), CoinTuning::default());
    let PlayOutcome::Started(next) = anim.play(0.0, Some(done)) else {
        panic!("animation should start");
    };
    assert!(destination.borrow().is_none());
    run_to_idle(&mut anim, next);

    assert_eq!(
        destination.borrow().as_deref(),
        Some("/gamedev-pd/domain/2/page/3")
    );
}

#[test]
fn keyboard_walk_through_domain() {
    let store = store();
    store.init().unwrap();
    let nav = Navigation::default();

    let mut page = catalog::resolve_page(DomainId(4), 1).unwrap();
    let mut visited = vec![page.page_num];
    store.mark_page_completed(page.domain_num, page.page_num).unwrap();

    // Nothing before page 1
    assert!(nav.key_name_intent("ArrowLeft", &page).is_none());

    for _ in 0..3 {
        let intent = nav.key_name_intent("ArrowRight", &page).unwrap();
        assert!(intent.prevent_default);
        let next_page: u32 = intent.url.rsplit('/').next().unwrap().parse().unwrap();
        page = catalog::resolve_page(DomainId(4), next_page).unwrap();
        store.mark_page_completed(page.domain_num, page.page_num).unwrap();
        visited.push(page.page_num);
    }

    let progress = store.get_domain_progress(DomainId(4)).unwrap();
    assert_eq!(progress.completed, visited);
    assert_eq!(progress.current_page, 4);

    let back = nav.key_name_intent("ArrowLeft", &page).unwrap();
    assert_eq!(back.url, "/gamedev-pd/domain/4/page/3");
    let lobby = nav.key_name_intent("Escape", &page).unwrap();
    assert_eq!(lobby.url, "/gamedev-pd/");
}

#[test]
fn reset_clears_every_domain() {
    let store = store();
    store.init().unwrap();
    for domain in DOMAINS.iter() {
        store.mark_page_completed(domain.id, domain.total_pages).unwrap();
    }
    store.clear().unwrap();

    let presenter = ProgressPresenter::new(&store);
    for domain in DOMAINS.iter() {
        assert_eq!(presenter.completed_count(domain.id), 0);
        assert_eq!(presenter.resume_page(domain.id), 1);
    }
}
