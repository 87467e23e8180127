//! Invariants of the view router
//!
//! These tests verify:
//! - Selecting any screen makes it current
//! - At most one container is ever visible
//! - Returning to the menu is idempotent
//! - Invalid identifiers never mutate state

use crate::error::NavigationError;
use crate::router::ViewRouter;
use crate::screen::Screen;
use crate::surface::MemorySurface;

fn mounted_router() -> ViewRouter<MemorySurface> {
    ViewRouter::new(MemorySurface::with_all())
}

#[test]
fn test_new_router_shows_only_menu() {
    let router = mounted_router();
    assert_eq!(router.current_screen(), Screen::Menu);
    assert_eq!(router.visible_screens(), vec![Screen::Menu]);
}

#[test]
fn test_select_sets_current_screen() {
    for start in Screen::ALL {
        for target in Screen::ALL {
            let mut router = mounted_router();
            router.select(start).unwrap();
            router.select(target).unwrap();
            assert_eq!(
                router.current_screen(),
                target,
                "select({target}) from {start} should make {target} current"
            );
        }
    }
}

#[test]
fn test_select_keeps_single_visible_screen() {
    let mut router = mounted_router();
    let walk = [
        Screen::Compliance,
        Screen::Insights,
        Screen::Insights,
        Screen::Menu,
        Screen::Insights,
        Screen::Compliance,
    ];

    for target in walk {
        router.select(target).unwrap();
        assert_eq!(router.visible_screens(), vec![target]);
    }
}

#[test]
fn test_return_to_menu_is_idempotent() {
    let mut router = mounted_router();
    router.select(Screen::Insights).unwrap();

    router.return_to_menu();
    assert_eq!(router.current_screen(), Screen::Menu);
    assert_eq!(router.visible_screens(), vec![Screen::Menu]);

    router.return_to_menu();
    assert_eq!(router.current_screen(), Screen::Menu);
    assert_eq!(router.visible_screens(), vec![Screen::Menu]);
}

#[test]
fn test_invalid_identifier_leaves_state_unchanged() {
    let mut router = mounted_router();
    router.select(Screen::Compliance).unwrap();

    for id in ["", "reports", "[object PointerEvent]", "compliance-screen"] {
        let err = router.select_named(id).unwrap_err();
        assert_eq!(err, NavigationError::InvalidScreen(id.to_string()));
        assert_eq!(router.current_screen(), Screen::Compliance);
        assert_eq!(router.visible_screens(), vec![Screen::Compliance]);
    }
}

#[test]
fn test_select_named_accepts_known_ids() {
    let mut router = mounted_router();
    assert_eq!(router.select_named("insights"), Ok(Screen::Insights));
    assert_eq!(router.current_screen(), Screen::Insights);
    assert_eq!(router.select_named("MENU"), Ok(Screen::Menu));
    assert_eq!(router.current_screen(), Screen::Menu);
}

#[test]
fn test_reselecting_current_screen_is_noop() {
    let mut router = mounted_router();
    router.select(Screen::Compliance).unwrap();
    let before = router.state();

    router.select(Screen::Compliance).unwrap();

    assert_eq!(router.state(), before);
    assert_eq!(router.visible_screens(), vec![Screen::Compliance]);
}
