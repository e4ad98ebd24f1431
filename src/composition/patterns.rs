//! Ready-made section layouts assembled from components.
//!
//! Patterns only build [`Component`] trees; colors still resolve against the composition theme
//! at render time.

use crate::{
    animation::stagger::{Stagger, StaggerAnimation},
    components::{
        Align, Badge, Component, Container, ContentArea, Counter, DataDisplay, Divider, FadeIn,
        FullBleed, Grid, Image, Span, SpringPop, StaggerGroup, Text, Title,
        data::{BadgeVariant, DataValue, Orientation},
        layout::VerticalAlign,
        text_style,
        typography::{TextSize, TitleSize},
    },
    node::model::Style,
    theme::tokens::{font_size, font_weight, radii},
};

/// Margin under a section title.
const TITLE_GAP: f64 = 60.0;

/// Full-screen title card, optionally over a darkened image.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub title: String,
    pub subtitle: Option<String>,
    pub background_image: Option<String>,
    pub background: Option<String>,
    /// Opacity of the black overlay drawn over the image.
    pub overlay_opacity: f64,
    pub title_color: Option<String>,
    pub subtitle_color: Option<String>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            background_image: None,
            background: None,
            overlay_opacity: 0.4,
            title_color: None,
            subtitle_color: None,
        }
    }
}

pub fn hero_section(props: &HeroSection) -> Component {
    let on_image = props.background_image.is_some();
    let mut layers: Vec<Component> = Vec::new();
    if let Some(src) = &props.background_image {
        layers.push(Image::cover(src.as_str()).into());
        layers.push(
            Container::new(
                Style::new()
                    .kw("position", "absolute")
                    .px("inset", 0.0)
                    .kw("background", format!("rgba(0,0,0,{})", props.overlay_opacity)),
                Vec::new(),
            )
            .into(),
        );
    }

    let title_color = props
        .title_color
        .clone()
        .or_else(|| on_image.then(|| "#fff".to_owned()));
    let mut content = vec![
        FadeIn::new(vec![
            Title {
                color: title_color,
                ..Title::hero(props.title.as_str())
            }
            .into(),
        ])
        .into(),
    ];
    if let Some(subtitle) = &props.subtitle {
        let color = props
            .subtitle_color
            .clone()
            .or_else(|| on_image.then(|| "rgba(255,255,255,0.8)".to_owned()));
        let subtitle = Title {
            style: Style::new().px("marginTop", 24.0),
            ..Title::subtitle(subtitle.as_str())
        };
        // Without an explicit or image color the subtitle takes the muted theme color.
        let subtitle = match color {
            Some(color) => Component::from(Title {
                color: Some(color),
                ..subtitle
            }),
            None => muted_title(subtitle),
        };
        content.push(FadeIn::new(vec![subtitle]).delay(15).into());
    }
    layers.push(
        ContentArea {
            children: content,
            ..ContentArea::default()
        }
        .into(),
    );

    FullBleed {
        background: if on_image {
            None
        } else {
            props.background.clone()
        },
        children: layers,
        style: Style::new(),
    }
    .into()
}

/// Title rendered in the theme's muted color.
fn muted_title(title: Title) -> Component {
    Text {
        text: title.text,
        muted: true,
        align: title.align,
        style: text_style(&title.size.text_style()).merge(&title.style),
        ..Text::default()
    }
    .into()
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

/// Grid of features revealed one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeatureList {
    pub title: Option<String>,
    pub features: Vec<Feature>,
    pub columns: u32,
    pub background: Option<String>,
}

impl Default for FeatureList {
    fn default() -> Self {
        Self {
            title: None,
            features: Vec::new(),
            columns: 2,
            background: None,
        }
    }
}

pub fn feature_list(props: &FeatureList) -> Component {
    let items = props.features.iter().map(feature_item).collect();
    let stagger = Stagger {
        initial_delay: if props.title.is_some() { 20 } else { 0 },
        stagger_delay: 12,
        ..Stagger::default()
    };
    let mut grid = StaggerGroup::new(stagger, StaggerAnimation::FadeIn, items);
    grid.style = Style::new()
        .kw("display", "grid")
        .kw("gridTemplateColumns", format!("repeat({}, 1fr)", props.columns))
        .px("gap", 48.0)
        .pct("width", 100.0);

    let mut content = section_title(props.title.as_deref(), TITLE_GAP);
    content.push(grid.into());
    section(props.background.clone(), content)
}

fn feature_item(feature: &Feature) -> Component {
    let mut body = vec![
        Text {
            bold: true,
            style: Style::new()
                .px("fontSize", font_size::SUBTITLE)
                .px(
                    "marginBottom",
                    if feature.description.is_some() { 12.0 } else { 0.0 },
                ),
            ..Text::new(feature.title.as_str())
        }
        .into(),
    ];
    if let Some(description) = &feature.description {
        body.push(
            Text {
                style: Style::new().num("lineHeight", 1.4),
                ..Text::new(description.as_str()).muted()
            }
            .into(),
        );
    }

    let mut row = Vec::with_capacity(2);
    if let Some(icon) = &feature.icon {
        row.push(
            Span {
                text: icon.clone(),
                style: Style::new().px("fontSize", 56.0).num("lineHeight", 1.0),
            }
            .into(),
        );
    }
    row.push(Container::new(Style::new(), body).into());
    Container::new(
        Style::new()
            .kw("display", "flex")
            .kw("alignItems", "flex-start")
            .px("gap", 24.0),
        row,
    )
    .into()
}

/// Value shown by a dashboard tile.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DataItemValue {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataItem {
    pub value: DataItemValue,
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Count numeric values up from zero.
    #[serde(default = "default_true")]
    pub animate: bool,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

fn default_true() -> bool {
    true
}

impl DataItem {
    pub fn number(value: f64, label: impl Into<String>) -> Self {
        Self {
            value: DataItemValue::Number(value),
            label: label.into(),
            color: None,
            animate: true,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Grid of popping statistics with counting numbers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DataDashboard {
    pub title: Option<String>,
    pub items: Vec<DataItem>,
    pub columns: u32,
    pub background: Option<String>,
}

impl Default for DataDashboard {
    fn default() -> Self {
        Self {
            title: None,
            items: Vec::new(),
            columns: 3,
            background: None,
        }
    }
}

pub fn data_dashboard(props: &DataDashboard) -> Component {
    let base_delay = if props.title.is_some() { 20 } else { 0 };
    let tiles = props
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let delay = base_delay + i as u64 * 10;
            let value = match &item.value {
                DataItemValue::Number(n) if item.animate => DataValue::from(Counter {
                    delay,
                    prefix: item.prefix.clone(),
                    suffix: item.suffix.clone(),
                    ..Counter::new(*n)
                }),
                DataItemValue::Number(n) => {
                    DataValue::Text(format!("{}{n}{}", item.prefix, item.suffix))
                }
                DataItemValue::Text(t) => {
                    DataValue::Text(format!("{}{t}{}", item.prefix, item.suffix))
                }
            };
            let display = DataDisplay {
                color: item.color.clone(),
                ..DataDisplay::new(value, item.label.as_str())
            };
            SpringPop::new(vec![display.into()]).delay(delay).into()
        })
        .collect();

    let mut content = section_title(props.title.as_deref(), TITLE_GAP);
    content.push(Grid::new(props.columns, tiles).gap(80.0).into());
    section(props.background.clone(), content)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallToAction {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub sublabel: Option<String>,
}

impl CallToAction {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            sublabel: None,
        }
    }
}

/// Closing card with a message and a row of calls to action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutroSection {
    pub message: String,
    pub ctas: Vec<CallToAction>,
    pub background: Option<String>,
}

impl Default for OutroSection {
    fn default() -> Self {
        Self {
            message: "Thanks for Watching!".to_owned(),
            ctas: vec![
                CallToAction::new("👍", "Like"),
                CallToAction::new("💰", "Coin"),
                CallToAction::new("⭐", "Favorite"),
            ],
            background: None,
        }
    }
}

pub fn outro_section(props: &OutroSection) -> Component {
    let mut content = vec![FadeIn::new(vec![Title::new(props.message.as_str()).into()]).into()];

    if !props.ctas.is_empty() {
        let ctas = props
            .ctas
            .iter()
            .enumerate()
            .map(|(i, cta)| {
                SpringPop::new(vec![cta_tile(cta)])
                    .delay(25 + i as u64 * 10)
                    .into()
            })
            .collect();
        let row = Container::new(
            Style::new()
                .kw("display", "flex")
                .px("gap", 80.0)
                .px("marginTop", 60.0),
            ctas,
        );
        content.push(FadeIn::new(vec![row.into()]).delay(15).into());
    }
    section(props.background.clone(), content)
}

fn cta_tile(cta: &CallToAction) -> Component {
    let mut lines = vec![
        Span {
            text: cta.icon.clone(),
            style: Style::new().px("fontSize", 64.0).px("marginBottom", 12.0),
        }
        .into(),
        Text {
            align: Align::Center,
            style: Style::new()
                .px("fontSize", font_size::BODY)
                .num("fontWeight", font_weight::BOLD),
            ..Text::new(cta.label.as_str())
        }
        .into(),
    ];
    if let Some(sublabel) = &cta.sublabel {
        lines.push(
            Text {
                align: Align::Center,
                size: TextSize::Small,
                style: Style::new().px("fontSize", font_size::CAPTION),
                ..Text::new(sublabel.as_str()).muted()
            }
            .into(),
        );
    }
    Container::new(Style::new().kw("textAlign", "center"), lines).into()
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub date: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Shown in the marker of a horizontal timeline instead of the step number.
    pub icon: Option<String>,
}

impl TimelineEvent {
    pub fn new(date: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Dated milestones along an accent line, revealed in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub title: Option<String>,
    pub events: Vec<TimelineEvent>,
    pub direction: Orientation,
    pub background: Option<String>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            title: None,
            events: Vec::new(),
            direction: Orientation::Vertical,
            background: None,
        }
    }
}

pub fn timeline(props: &Timeline) -> Component {
    let initial_delay = if props.title.is_some() { 20 } else { 0 };
    match props.direction {
        Orientation::Vertical => vertical_timeline(props, initial_delay),
        Orientation::Horizontal => horizontal_timeline(props, initial_delay),
    }
}

fn vertical_timeline(props: &Timeline, initial_delay: u64) -> Component {
    // Accent at 0x30 alpha.
    let line = Divider {
        orientation: Orientation::Vertical,
        thickness: 4.0,
        accent: true,
        opacity: f64::from(0x30_u8) / 255.0,
        margin: 0.0,
        style: Style::new()
            .kw("position", "absolute")
            .px("left", 20.0)
            .px("top", 0.0)
            .px("bottom", 0.0)
            .kw("height", "auto")
            .px("borderRadius", radii::FULL),
        ..Divider::default()
    };
    let stagger = Stagger {
        initial_delay,
        stagger_delay: 12,
        ..Stagger::default()
    };
    let rows = props.events.iter().map(vertical_event).collect();
    let track = Container::new(
        Style::new()
            .kw("position", "relative")
            .pct("width", 100.0)
            .px("paddingLeft", 60.0),
        vec![
            line.into(),
            StaggerGroup::new(stagger, StaggerAnimation::FadeIn, rows).into(),
        ],
    );

    let mut content = section_title(props.title.as_deref(), 48.0);
    content.push(track.into());
    section_in(
        props.background.clone(),
        ContentArea {
            vertical_align: VerticalAlign::Top,
            children: content,
            ..ContentArea::default()
        },
    )
}

fn vertical_event(event: &TimelineEvent) -> Component {
    let dot = Badge {
        pill: true,
        style: Style::new()
            .kw("position", "absolute")
            .px("left", -48.0)
            .px("width", 20.0)
            .px("height", 20.0)
            .px("padding", 0.0),
        ..Badge::new("", BadgeVariant::Info)
    };
    let body = event_lines(event, 4.0, font_size::SUBTITLE, font_size::BODY);
    Container::new(
        Style::new()
            .kw("display", "flex")
            .kw("alignItems", "flex-start")
            .px("marginBottom", 40.0)
            .kw("position", "relative"),
        vec![dot.into(), Container::new(Style::new(), body).into()],
    )
    .into()
}

fn horizontal_timeline(props: &Timeline, initial_delay: u64) -> Component {
    let stagger = Stagger {
        initial_delay,
        stagger_delay: 15,
        ..Stagger::default()
    };
    let items = props
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| horizontal_event(i, event))
        .collect();
    let mut row = StaggerGroup::new(stagger, StaggerAnimation::SlideUp, items);
    row.style = Style::new()
        .kw("display", "flex")
        .kw("alignItems", "flex-start")
        .px("gap", 24.0)
        .pct("width", 100.0);

    let mut content = section_title(props.title.as_deref(), TITLE_GAP);
    content.push(row.into());
    section(props.background.clone(), content)
}

fn horizontal_event(index: usize, event: &TimelineEvent) -> Component {
    let marker = event.icon.clone().unwrap_or_else(|| (index + 1).to_string());
    let marker = Badge {
        pill: true,
        style: Style::new()
            .px("width", 48.0)
            .px("height", 48.0)
            .px("padding", 0.0)
            .px("fontSize", 24.0)
            .px("marginBottom", 16.0),
        ..Badge::new(marker, BadgeVariant::Info)
    };
    let mut lines: Vec<Component> = vec![marker.into()];
    lines.extend(event_lines(event, 8.0, font_size::BODY, font_size::CAPTION));
    Container::new(
        Style::new()
            .num("flex", 1.0)
            .kw("display", "flex")
            .kw("flexDirection", "column")
            .kw("alignItems", "center")
            .kw("textAlign", "center"),
        lines,
    )
    .into()
}

/// Date, title and description of one event.
fn event_lines(
    event: &TimelineEvent,
    date_gap: f64,
    title_size: f64,
    description_size: f64,
) -> Vec<Component> {
    let mut lines = Vec::with_capacity(3);
    if let Some(date) = &event.date {
        lines.push(
            Text {
                style: Style::new()
                    .px("fontSize", font_size::CAPTION)
                    .num("fontWeight", font_weight::SEMIBOLD)
                    .px("marginBottom", date_gap),
                ..Text::new(date.as_str()).accent()
            }
            .into(),
        );
    }
    lines.push(
        Text {
            bold: true,
            style: Style::new().px("fontSize", title_size).px(
                "marginBottom",
                if event.description.is_some() { 8.0 } else { 0.0 },
            ),
            ..Text::new(event.title.as_str())
        }
        .into(),
    );
    if let Some(description) = &event.description {
        lines.push(
            Text {
                style: Style::new()
                    .px("fontSize", description_size)
                    .num("lineHeight", 1.4),
                ..Text::new(description.as_str()).muted()
            }
            .into(),
        );
    }
    lines
}

fn section_title(title: Option<&str>, gap: f64) -> Vec<Component> {
    title
        .map(|t| {
            let title = Title {
                size: TitleSize::Large,
                style: Style::new().px("marginBottom", gap),
                ..Title::new(t)
            };
            FadeIn::new(vec![title.into()]).into()
        })
        .into_iter()
        .collect()
}

fn section(background: Option<String>, content: Vec<Component>) -> Component {
    section_in(
        background,
        ContentArea {
            children: content,
            ..ContentArea::default()
        },
    )
}

fn section_in(background: Option<String>, area: ContentArea) -> Component {
    FullBleed {
        background,
        children: vec![area.into()],
        style: Style::new(),
    }
    .into()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/patterns.rs"]
mod tests;
