// End-to-end editor behavior driven through the in-memory host

use rich_text_widget::config::{EditorConfig, STARTER_MARKUP};
use rich_text_widget::surface::headless::{HeadlessSurface, SurfaceEvent};
use rich_text_widget::toolbar::ToolbarAction;
use rich_text_widget::{
    BlockFormat, Color, ColorState, CommandId, ContentState, RootController, TextStatistics,
};

fn mounted_editor() -> RootController<HeadlessSurface> {
    let mut controller = RootController::new(EditorConfig::default()).expect("default config is valid");
    controller.mount(HeadlessSurface::new(""));
    controller
}

#[test]
fn test_starter_state() {
    let controller = mounted_editor();

    // Starter markup: one level-2 heading and one paragraph
    let markup = &controller.snapshot().markup_html;
    assert_eq!(markup, STARTER_MARKUP);
    assert_eq!(markup.matches("<h2>").count(), 1);
    assert_eq!(markup.matches("<p>").count(), 1);

    let stats = controller.statistics();
    assert_eq!(
        stats,
        TextStatistics { words: 23, characters: 121, sentences: 2 }
    );
    assert_eq!(stats.words, controller.snapshot().plain_text.split_whitespace().count());
}

#[test]
fn test_reset_after_arbitrary_edits() {
    let mut controller = mounted_editor();
    controller.surface_mut().unwrap().select_inside();

    controller.dispatch(ToolbarAction::Toggle(CommandId::Bold));
    controller.dispatch(ToolbarAction::SetBlock(BlockFormat::Quote));
    controller.dispatch(ToolbarAction::SetForeground(Color::parse("#336699").unwrap()));
    controller.surface_mut().unwrap().type_markup("<p>Completely different.</p>");
    controller.on_input();
    assert_eq!(controller.content_state(), ContentState::Custom);
    assert_eq!(controller.statistics().words, 2);

    controller.reset();

    assert_eq!(controller.snapshot().markup_html, STARTER_MARKUP);
    assert!(controller.selection().is_default());
    assert_eq!(controller.colors(), &ColorState::default());
    assert_eq!(controller.content_state(), ContentState::Default);

    // Twice is the same as once
    let once = controller.report();
    controller.reset();
    assert_eq!(controller.report(), once);
}

#[test]
fn test_selection_outside_surface_is_default_regardless_of_history() {
    let mut controller = mounted_editor();
    controller.surface_mut().unwrap().select_inside();
    controller.dispatch(ToolbarAction::Toggle(CommandId::Italic));
    controller.dispatch(ToolbarAction::Toggle(CommandId::AlignRight));
    controller.dispatch(ToolbarAction::SetBlock(BlockFormat::Heading3));
    assert!(!controller.selection().is_default());

    controller.surface_mut().unwrap().select_outside();
    assert!(controller.on_selection_change());
    assert!(controller.selection().is_default());
    assert_eq!(controller.selection().block_type.as_str(), "paragraph");
}

#[test]
fn test_toolbar_reflects_selection() {
    let mut controller = mounted_editor();
    controller.surface_mut().unwrap().select_inside();
    controller.dispatch(ToolbarAction::Toggle(CommandId::UnorderedList));
    controller.dispatch(ToolbarAction::SetBlock(BlockFormat::Heading1));

    let model = controller.toolbar_model();
    let pressed: Vec<_> = model.buttons().filter(|b| b.active).map(|b| b.command).collect();
    assert_eq!(pressed, vec![CommandId::UnorderedList]);
    assert_eq!(model.selected_block(), Some("h1"));
}

#[test]
fn test_every_toolbar_action_refocuses_before_executing() {
    let mut controller = mounted_editor();
    let actions = vec![
        ToolbarAction::Toggle(CommandId::Bold),
        ToolbarAction::Toggle(CommandId::AlignJustify),
        ToolbarAction::SetBlock(BlockFormat::Paragraph),
        ToolbarAction::SetBackground(Color::parse("#ffff00").unwrap()),
        ToolbarAction::ClearFormatting,
    ];

    for action in actions {
        controller.surface_mut().unwrap().clear_events();
        controller.dispatch(action);
        let events = controller.surface().unwrap().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SurfaceEvent::Focus);
        assert!(matches!(events[1], SurfaceEvent::Execute { .. }));
    }
}

#[test]
fn test_format_block_without_value_matches_paragraph() {
    let mut bare = mounted_editor();
    bare.apply_named("format-block", None).unwrap();
    let mut explicit = mounted_editor();
    explicit.apply_named("format-block", Some("paragraph")).unwrap();

    assert_eq!(
        bare.surface().unwrap().events(),
        explicit.surface().unwrap().events()
    );
    assert_eq!(bare.report(), explicit.report());
}

#[test]
fn test_preview_tracks_markup() {
    let mut controller = mounted_editor();
    controller
        .surface_mut()
        .unwrap()
        .type_markup("<p>Hi! Bye? Ok.</p>");
    controller.on_input();

    let preview = controller.preview_model();
    assert_eq!(preview.preview_html, "<p>Hi! Bye? Ok.</p>");
    assert_eq!(preview.source_text, "<p>Hi! Bye? Ok.</p>");
    assert_eq!(preview.statistics.sentences, 3);
    assert_eq!(preview.summary(), "3 words · 12 characters · 3 sentences");
}

#[test]
fn test_custom_config_starter_and_colors() {
    let config = EditorConfig::from_json(
        r##"{"starterMarkup":"<p>Draft</p>","foreground":"#000","background":"#EEE"}"##,
    )
    .unwrap();
    let mut controller = RootController::new(config).unwrap();
    controller.mount(HeadlessSurface::new(""));

    assert_eq!(controller.snapshot().plain_text, "Draft");
    assert_eq!(controller.colors().foreground.as_str(), "#000000");
    assert_eq!(controller.colors().background.as_str(), "#eeeeee");
}
