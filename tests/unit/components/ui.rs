use super::*;
use crate::{
    components::{Text, data::Orientation},
    eval::context::FrameCtx,
    foundation::core::{Canvas, FrameIndex, Fps},
    theme::{
        model::Theme,
        presets::{ThemeName, get_theme},
    },
};

fn ctx(theme: Option<&Theme>) -> RenderCtx<'_> {
    RenderCtx::new(
        FrameCtx::new(FrameIndex(0), Fps::new(30, 1).unwrap(), 300, Canvas::HD),
        theme,
    )
}

#[test]
fn card_deserializes_by_type_tag() {
    let card: Component = serde_json::from_str(
        r#"{"type":"card","variant":"elevated","children":[{"type":"text","text":"Hi"}]}"#,
    )
    .unwrap();
    let Component::Card(card) = &card else {
        panic!("expected a card, got {card:?}");
    };
    assert_eq!(card.variant, CardVariant::Elevated);
    assert_eq!(card.padding, "36px 56px");
    assert_eq!(card.children.len(), 1);
}

#[test]
fn default_card_falls_back_to_tokens() {
    let node = Card::new(CardVariant::Default, vec![Text::new("body").into()])
        .render(&ctx(None))
        .unwrap();
    assert_eq!(node.style.keyword("background"), Some(tokens::colors::BG_CARD));
    assert_eq!(node.style.keyword("border"), Some("1px solid rgba(0,0,0,0.06)"));
    assert_eq!(node.style.keyword("boxShadow"), Some("none"));
    assert_eq!(node.style.number("borderRadius"), Some(semantic_radii::CARD));
    assert_eq!(node.text_content(), "body");
}

#[test]
fn card_background_prefers_prop_then_theme_card_color() {
    let mut theme = Theme::default();
    theme.colors.bg_card = Some("#101010".to_owned());
    theme.radii.card = 16.0;

    let themed = Card::default().render(&ctx(Some(&theme))).unwrap();
    assert_eq!(themed.style.keyword("background"), Some("#101010"));
    assert_eq!(themed.style.number("borderRadius"), Some(16.0));

    let explicit = Card {
        background: Some("#222".to_owned()),
        radius: Some(4.0),
        ..Card::default()
    }
    .render(&ctx(Some(&theme)))
    .unwrap();
    assert_eq!(explicit.style.keyword("background"), Some("#222"));
    assert_eq!(explicit.style.number("borderRadius"), Some(4.0));
}

#[test]
fn elevated_card_takes_the_theme_card_shadow() {
    let theme = get_theme(ThemeName::DarkTech);
    let node = Card::elevated(Vec::new()).render(&ctx(Some(&theme))).unwrap();
    assert_eq!(node.style.keyword("boxShadow"), Some(theme.shadows.card.as_str()));
    assert_eq!(node.style.keyword("border"), Some("none"));

    let bare = Card::elevated(Vec::new()).render(&ctx(None)).unwrap();
    assert_eq!(bare.style.keyword("boxShadow"), Some(shadows::CARD));
    assert_eq!(bare.style.keyword("background"), Some("#ffffff"));
}

#[test]
fn outlined_and_glass_cards() {
    let theme = get_theme(ThemeName::CorporateBlue);
    let outlined = Card::new(CardVariant::Outlined, Vec::new())
        .render(&ctx(Some(&theme)))
        .unwrap();
    assert_eq!(outlined.style.keyword("background"), Some("transparent"));
    assert_eq!(
        outlined.style.keyword("border"),
        Some(format!("2px solid {}", theme.colors.accent).as_str())
    );

    let glass = Card::glass(Vec::new()).render(&ctx(None)).unwrap();
    assert_eq!(glass.style.keyword("backdropFilter"), Some("blur(10px)"));
    assert_eq!(glass.style.keyword("background"), Some("rgba(255,255,255,0.1)"));
}

#[test]
fn card_user_style_wins() {
    let card = Card {
        style: Style::new().kw("padding", "0"),
        ..Card::default()
    };
    let node = card.render(&ctx(None)).unwrap();
    assert_eq!(node.style.keyword("padding"), Some("0"));
}

#[test]
fn card_children_are_validated() {
    let card: Component =
        serde_json::from_str(r#"{"type":"card","children":[{"type":"fade_in","duration":0}]}"#)
            .unwrap();
    assert_eq!(card.children().len(), 1);
    assert!(card.validate().is_err());
}

#[test]
fn primary_button_fills_with_accent() {
    let theme = get_theme(ThemeName::DarkTech);
    let button = Button {
        icon: Some("▶".to_owned()),
        ..Button::new("Play", ButtonVariant::Primary)
    };
    let node = button.render(&ctx(Some(&theme))).unwrap();
    assert_eq!(node.style.keyword("background"), Some(theme.colors.accent.as_str()));
    assert_eq!(node.style.keyword("color"), Some("#ffffff"));
    assert_eq!(node.style.keyword("padding"), Some("16px 32px"));
    assert_eq!(node.text_content(), "▶Play");
}

#[test]
fn button_sizes_and_width() {
    let button = Button {
        size: ButtonSize::Large,
        full_width: true,
        ..Button::new("Go", ButtonVariant::Ghost)
    };
    let node = button.render(&ctx(None)).unwrap();
    assert_eq!(node.style.number("fontSize"), Some(font_size::SUBTITLE));
    assert_eq!(node.style.number("borderRadius"), Some(radii::XL));
    assert_eq!(node.style.number("width"), Some(100.0));
    assert_eq!(node.style.keyword("background"), Some("transparent"));
}

#[test]
fn tag_tints_hex_accent() {
    let node = Tag::new("rust").render(&ctx(None)).unwrap();
    assert_eq!(
        node.style.keyword("background"),
        Some(format!("{}20", tokens::DEFAULT.accent).as_str())
    );
    assert_eq!(node.style.keyword("color"), Some(tokens::DEFAULT.accent));
    assert_eq!(node.style.keyword("padding"), Some("6px 14px"));
}

#[test]
fn tag_on_non_hex_accent_keeps_the_color() {
    let mut theme = Theme::default();
    theme.colors.accent = "rgb(1,2,3)".to_owned();
    let node = Tag::new("x").render(&ctx(Some(&theme))).unwrap();
    assert_eq!(node.style.keyword("background"), Some("rgb(1,2,3)"));
}

#[test]
fn tag_group_renders_each_tag() {
    let group = TagGroup {
        tags: vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
        size: TagSize::Small,
        ..TagGroup::default()
    };
    let node = group.render(&ctx(None)).unwrap();
    assert_eq!(node.children.len(), 3);
    assert_eq!(node.style.number("gap"), Some(12.0));
    assert_eq!(node.children[1].style.keyword("padding"), Some("4px 10px"));
    assert_eq!(node.text_content(), "abc");
}

#[test]
fn divider_color_resolution() {
    let bare = Divider::default().render(&ctx(None)).unwrap();
    assert_eq!(bare.style.keyword("background"), Some("rgba(0,0,0,0.1)"));
    assert_eq!(bare.style.number("height"), Some(1.0));
    assert_eq!(bare.style.number("marginTop"), Some(24.0));

    let mut theme = Theme::default();
    theme.colors.border = Some("#333333".to_owned());
    let themed = Divider::default().render(&ctx(Some(&theme))).unwrap();
    assert_eq!(themed.style.keyword("background"), Some("#333333"));

    let accent = Divider {
        accent: true,
        ..Divider::default()
    }
    .render(&ctx(Some(&theme)))
    .unwrap();
    assert_eq!(accent.style.keyword("background"), Some(theme.colors.accent.as_str()));
}

#[test]
fn vertical_and_gradient_dividers() {
    let vertical = Divider::vertical().render(&ctx(None)).unwrap();
    assert_eq!(vertical.style.number("width"), Some(1.0));
    assert_eq!(vertical.style.number("marginLeft"), Some(24.0));
    assert_eq!(Divider::vertical().orientation, Orientation::Vertical);

    let gradient = Divider::gradient().render(&ctx(None)).unwrap();
    assert_eq!(
        gradient.style.keyword("background"),
        Some("linear-gradient(90deg, transparent, rgba(0,0,0,0.1), transparent)")
    );
}

#[test]
fn list_markers_follow_style_and_item_icons() {
    let numbered = List::new(ListStyle::Number, vec!["a".into(), "b".into()]);
    assert_eq!(numbered.marker(1).as_deref(), Some("2."));
    assert_eq!(numbered.marker(2), None);

    let items: Vec<ListItem> =
        serde_json::from_str(r#"["plain", {"text": "own", "icon": "🚀"}]"#).unwrap();
    let list = List {
        icon: Some("★".to_owned()),
        ..List::new(ListStyle::Check, items)
    };
    assert_eq!(list.marker(0).as_deref(), Some("★"));
    assert_eq!(list.marker(1).as_deref(), Some("🚀"));

    let bare = List::new(ListStyle::None, vec!["x".into()]);
    assert_eq!(bare.marker(0), None);
}

#[test]
fn list_rows_use_accent_markers() {
    let theme = get_theme(ThemeName::DarkTech);
    let list = List::new(ListStyle::Number, vec!["one".into(), "two".into()]);
    let node = list.render(&ctx(Some(&theme))).unwrap();
    assert_eq!(node.children.len(), 2);
    let [marker, text] = node.children[0].children.as_slice() else {
        panic!("expected marker and text");
    };
    assert_eq!(marker.text.as_deref(), Some("1."));
    assert_eq!(marker.style.keyword("color"), Some(theme.colors.accent.as_str()));
    assert_eq!(marker.style.number("minWidth"), Some(60.0));
    assert_eq!(text.style.number("fontSize"), Some(theme.typography.font_size.body));
    assert_eq!(node.text_content(), "1.one2.two");
}

#[test]
fn icon_tile_is_half_again_the_glyph() {
    let plain = Icon::new("🎬").render(&ctx(None)).unwrap();
    assert_eq!(plain.style.number("fontSize"), Some(60.0));
    assert_eq!(plain.style.keyword("width"), Some("auto"));

    let circle = Icon {
        size: IconSize::Small,
        ..Icon::circle("🎬")
    }
    .render(&ctx(None))
    .unwrap();
    assert_eq!(circle.style.number("width"), Some(60.0));
    assert_eq!(circle.style.number("borderRadius"), Some(radii::FULL));
    assert_eq!(
        circle.style.keyword("background"),
        Some(format!("{}15", tokens::DEFAULT.accent).as_str())
    );

    let custom = Icon {
        custom_size: Some(100.0),
        background: Some("#000".to_owned()),
        ..Icon::new("x")
    }
    .render(&ctx(None))
    .unwrap();
    assert_eq!(custom.style.number("height"), Some(150.0));
    assert_eq!(custom.style.number("borderRadius"), Some(radii::LG));
}
