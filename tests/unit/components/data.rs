use super::*;
use crate::{
    eval::context::FrameCtx,
    foundation::core::{Canvas, FrameIndex, Fps},
    theme::{
        model::Theme,
        presets::{ThemeName, get_theme},
    },
};

fn ctx_at(frame: u64, theme: Option<&Theme>) -> RenderCtx<'_> {
    RenderCtx::new(
        FrameCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap(), 300, Canvas::HD),
        theme,
    )
}

fn fill_of(node: &VisualNode) -> &VisualNode {
    // root > track > fill
    &node.children[0].children[0]
}

#[test]
fn progress_bar_fills_to_clamped_value() {
    let bar = ProgressBar::new(140.0);
    assert_eq!(bar.progress(&ctx_at(0, None)), 0.0);
    assert_eq!(bar.progress(&ctx_at(30, None)), 100.0);

    let bar = ProgressBar::new(75.0);
    let node = bar.render(&ctx_at(45, None)).unwrap();
    assert_eq!(fill_of(&node).style.number("width"), Some(75.0));
    let half = bar.progress(&ctx_at(15, None));
    assert!(half > 37.5 && half < 75.0, "OutCubic runs ahead of linear: {half}");
}

#[test]
fn inside_label_waits_for_ten_percent() {
    let bar = ProgressBar {
        show_label: true,
        delay: 10,
        ..ProgressBar::new(80.0)
    };
    let early = bar.render(&ctx_at(10, None)).unwrap();
    assert!(fill_of(&early).children.is_empty());

    let done = bar.render(&ctx_at(40, None)).unwrap();
    let label = &fill_of(&done).children[0];
    assert_eq!(label.text.as_deref(), Some("80%"));
    assert_eq!(label.style.keyword("color"), Some(LABEL_ON_FILL));
}

#[test]
fn above_label_precedes_the_track() {
    let bar = ProgressBar {
        show_label: true,
        label_position: LabelPosition::Above,
        ..ProgressBar::new(50.0)
    };
    let node = bar.render(&ctx_at(30, None)).unwrap();
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[0].text_content(), "50%");
    assert_eq!(node.children[0].style.keyword("textAlign"), Some("right"));
}

#[test]
fn track_color_falls_back_through_theme_border() {
    let mut theme = Theme::default();
    theme.colors.border = Some("#abc".to_owned());
    let node = ProgressBar::new(10.0)
        .render(&ctx_at(0, Some(&theme)))
        .unwrap();
    assert_eq!(node.children[0].style.keyword("background"), Some("#abc"));

    theme.colors.border = None;
    let node = ProgressBar::new(10.0)
        .render(&ctx_at(0, Some(&theme)))
        .unwrap();
    assert_eq!(node.children[0].style.keyword("background"), Some("rgba(0,0,0,0.1)"));
}

#[test]
fn vertical_bar_grows_from_the_bottom() {
    let bar = ProgressBar {
        orientation: Orientation::Vertical,
        ..ProgressBar::new(60.0)
    };
    let node = bar.render(&ctx_at(30, None)).unwrap();
    assert_eq!(node.style.number("height"), Some(200.0));
    assert_eq!(node.style.number("width"), Some(40.0));
    let fill = &node.children[0];
    assert_eq!(fill.style.number("bottom"), Some(0.0));
    assert_eq!(fill.style.number("height"), Some(60.0));
}

#[test]
fn counter_counts_up_and_formats() {
    let c = Counter::new(1234.0);
    assert_eq!(c.display(&ctx_at(0, None)), "0");
    assert_eq!(c.display(&ctx_at(30, None)), "1,234");

    let pct = Counter::percentage(42.0);
    assert_eq!(pct.display(&ctx_at(99, None)), "42%");

    let money = Counter {
        decimals: 2,
        ..Counter::currency(19.5, "$")
    };
    assert_eq!(money.display(&ctx_at(30, None)), "$19.50");
}

#[test]
fn compact_counter_is_linear() {
    let c = Counter::compact(2_000_000.0);
    assert_eq!(c.display(&ctx_at(15, None)), "1.0M");
    assert_eq!(c.display(&ctx_at(30, None)), "2.0M");
}

#[test]
fn counter_honours_delay() {
    let c = Counter {
        delay: 20,
        ..Counter::new(500.0)
    };
    assert_eq!(c.display(&ctx_at(20, None)), "0");
    assert_eq!(c.display(&ctx_at(50, None)), "500");
}

#[test]
fn badge_variants_pick_theme_colors() {
    let theme = get_theme(ThemeName::DarkTech);
    let ctx = ctx_at(0, Some(&theme));

    let ok = Badge::new("ok", BadgeVariant::Success).render(&ctx).unwrap();
    assert_eq!(ok.style.keyword("background"), Some(theme.colors.positive.as_str()));

    let outline = Badge::new("new", BadgeVariant::Outline)
        .render(&ctx)
        .unwrap();
    assert_eq!(outline.style.keyword("background"), Some("transparent"));
    assert_eq!(
        outline.style.keyword("border"),
        Some(format!("2px solid {}", theme.colors.accent).as_str())
    );
}

#[test]
fn badge_sizes_and_shape() {
    let ctx = ctx_at(0, None);
    let small = Badge {
        size: BadgeSize::Small,
        pill: false,
        ..Badge::new("s", BadgeVariant::Default)
    }
    .render(&ctx)
    .unwrap();
    assert_eq!(small.style.keyword("padding"), Some("4px 12px"));
    assert_eq!(small.style.number("fontSize"), Some(font_size::SMALL));
    assert_eq!(small.style.number("borderRadius"), Some(radii::MD));

    let warn = Badge::new("w", BadgeVariant::Warning).render(&ctx).unwrap();
    assert_eq!(warn.style.keyword("background"), Some(tokens::colors::WARNING));
}

#[test]
fn data_display_orders_label_and_value() {
    let ctx = ctx_at(0, None);
    let bottom = DataDisplay::new("99", "uptime").render(&ctx).unwrap();
    assert_eq!(bottom.children[0].text.as_deref(), Some("99"));
    assert_eq!(bottom.children[1].text.as_deref(), Some("uptime"));
    assert_eq!(bottom.children[0].style.number("fontSize"), Some(font_size::DATA_LARGE));

    let top = DataDisplay {
        label_position: LabelSide::Top,
        ..DataDisplay::new("99", "uptime")
    }
    .render(&ctx)
    .unwrap();
    assert_eq!(top.children[0].text.as_deref(), Some("uptime"));
    assert_eq!(top.children[0].style.number("marginBottom"), Some(8.0));
}

#[test]
fn data_display_embeds_a_counter() {
    let display = DataDisplay::new(Counter::new(300.0), "users");
    let node = display.render(&ctx_at(30, None)).unwrap();
    assert_eq!(node.text_content(), "300users");

    let json = serde_json::to_value(&display).unwrap();
    assert_eq!(json["value"]["type"], "counter");
    let back: DataDisplay = serde_json::from_value(json).unwrap();
    assert_eq!(back, display);
}

#[test]
fn stat_colors_change_by_trend() {
    let theme = get_theme(ThemeName::DarkTech);
    let up = Stat::new("98%", "Uptime").change("+2%", Trend::Up);
    let node = up.render(&ctx_at(0, Some(&theme))).unwrap();
    assert_eq!(node.children.len(), 3);
    assert_eq!(node.text_content(), "98%Uptime↑+2%");

    let change = &node.children[2];
    assert_eq!(change.style.keyword("color"), Some(theme.colors.positive.as_str()));
    assert_eq!(change.children[0].style.number("fontSize"), Some(font_size::CAPTION * 0.8));

    let down = Stat::new("3", "Incidents").change("-1", Trend::Down);
    let node = down.render(&ctx_at(0, Some(&theme))).unwrap();
    assert_eq!(node.children[2].style.keyword("color"), Some(theme.colors.negative.as_str()));
}

#[test]
fn neutral_stat_has_no_arrow() {
    let stat = Stat {
        size: StatSize::Large,
        ..Stat::new("42", "Answers").change("0", Trend::Neutral)
    };
    let node = stat.render(&ctx_at(0, None)).unwrap();
    assert_eq!(node.text_content(), "42Answers0");
    assert_eq!(node.children[0].style.number("fontSize"), Some(font_size::DATA_LARGE));
    assert_eq!(node.children[2].style.keyword("color"), Some(tokens::DEFAULT.text_muted));

    let bare = Stat::new("1", "One").render(&ctx_at(0, None)).unwrap();
    assert_eq!(bare.children.len(), 2);
}

#[test]
fn stat_counts_up_an_embedded_counter() {
    let stat = Stat::new(Counter::new(500.0), "Stars");
    let end = stat.render(&ctx_at(60, None)).unwrap();
    assert_eq!(end.text_content(), "500Stars");

    let broken = Stat::new(
        Counter {
            duration: 0,
            ..Counter::new(1.0)
        },
        "Stars",
    );
    assert!(matches!(
        Component::from(broken).validate(),
        Err(crate::foundation::error::FramecraftError::Animation(_))
    ));
}
