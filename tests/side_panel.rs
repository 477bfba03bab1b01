//! Tests for side-panel title resolution.
use nodegate::prelude::*;
use serde_json::json;

#[test]
fn test_empty_side_panel_uses_default_title() {
    assert_eq!(side_panel_title("Images", None), "Images");
}

#[test]
fn test_named_view_titles() {
    let content = SidePanelContent::from(views::ADD_DOMAIN);
    assert_eq!(side_panel_title("Images", Some(&content)), "Add domains");

    let content = SidePanelContent::from(views::CREATE_ZONE);
    assert_eq!(side_panel_title("Zones", Some(&content)), "Add AZ");

    let content = SidePanelContent::from(views::UPDATE_TAG);
    assert_eq!(side_panel_title("Tags", Some(&content)), "Update Tag");
}

#[test]
fn test_every_named_view_resolves_to_its_title() {
    for view in views::ALL.iter() {
        let content = SidePanelContent::from(*view);
        assert_eq!(side_panel_title("Default", Some(&content)), view.title);
    }
}

#[test]
fn test_title_matches_on_name_only() {
    let content = SidePanelContent::new(SidePanelView::new("someOtherSection", "addDomain"));
    assert_eq!(side_panel_title("Default", Some(&content)), "Add domains");
}

#[test]
fn test_action_views_use_action_titles() {
    let view = SidePanelView::node_action("machineActionForm", NodeAction::Deploy);
    let content = SidePanelContent::new(view);
    assert_eq!(side_panel_title("Machines", Some(&content)), "Deploy");

    let content = SidePanelContent::new(SidePanelView::new("machineActionForm", "acquire"));
    assert_eq!(side_panel_title("Machines", Some(&content)), "Allocate");
}

#[test]
fn test_unmatched_name_falls_back_to_action() {
    let content = SidePanelContent::new(SidePanelView::new("kvmForm", "addLxdHost"));
    assert_eq!(side_panel_title("KVM", Some(&content)), "Action");
}

#[test]
fn test_empty_name_falls_back_to_default() {
    let content = SidePanelContent::new(SidePanelView::new("machineForm", ""));
    assert_eq!(side_panel_title("Machines", Some(&content)), "Machines");
}

#[test]
fn test_extras_do_not_affect_title() {
    let content = SidePanelContent::from(views::DELETE_IMAGE)
        .with_extras(json!({ "bootResource": { "id": 7 } }));
    assert_eq!(side_panel_title("Images", Some(&content)), "Delete image");
}

#[test]
fn test_content_serializes_view_as_pair() {
    let content = SidePanelContent::from(views::SET_DEFAULT);
    let value = serde_json::to_value(&content).unwrap();
    assert_eq!(value, json!({ "view": ["domainForm", "setDefault"] }));

    let parsed: SidePanelContent =
        serde_json::from_value(json!({ "view": ["machineActionForm", "clone"], "extras": {} }))
            .unwrap();
    assert_eq!(parsed.view.name(), "clone");
    assert_eq!(side_panel_title("Machines", Some(&parsed)), "Clone from");
}

#[test]
fn test_title_is_idempotent() {
    assert_eq!(side_panel_title("Images", None), side_panel_title("Images", None));

    let action = SidePanelContent::new(SidePanelView::node_action("machineActionForm", NodeAction::Clone));
    let unmatched = SidePanelContent::new(SidePanelView::new("kvmForm", "addLxdHost"));
    let named = views::ALL.iter().map(|view| SidePanelContent::from(*view));
    for content in named.chain([action, unmatched]) {
        let first = side_panel_title("Default", Some(&content));
        assert_eq!(side_panel_title("Default", Some(&content)), first);
    }
}
