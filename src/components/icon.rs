//! Icon Component
//!
//! Font Awesome glyph wrapped in a Bulma icon container.

use leptos::prelude::*;

/// Font Awesome style prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    #[default]
    Solid,
    Brands,
}

/// Glyph size modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

/// Bulma container element class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconType {
    FileIcon,
    #[default]
    Icon,
    PanelIcon,
}

/// Bulma container size modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconContainerSize {
    Small,
    #[default]
    Normal,
    Medium,
    Large,
}

impl IconStyle {
    pub fn as_class(&self) -> &'static str {
        match self {
            IconStyle::Solid => "fas",
            IconStyle::Brands => "fab",
        }
    }
}

impl IconSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            IconSize::Normal => "",
            IconSize::Large => "fa-lg",
            IconSize::ExtraLarge => "fa-2x",
        }
    }
}

impl IconType {
    pub fn as_class(&self) -> &'static str {
        match self {
            IconType::FileIcon => "file-icon",
            IconType::Icon => "icon",
            IconType::PanelIcon => "panel-icon",
        }
    }
}

impl IconContainerSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            IconContainerSize::Small => "is-small",
            IconContainerSize::Normal => "",
            IconContainerSize::Medium => "is-medium",
            IconContainerSize::Large => "is-large",
        }
    }
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Class list for the outer `<span>`
pub fn container_class(kind: IconType, container_size: IconContainerSize, left: bool) -> String {
    join_classes(&[
        kind.as_class(),
        container_size.as_class(),
        if left { "is-left" } else { "" },
    ])
}

/// Class list for the inner `<i>` glyph
pub fn glyph_class(style: IconStyle, name: &str, size: IconSize) -> String {
    let glyph = format!("fa-{}", name);
    join_classes(&[style.as_class(), &glyph, size.as_class()])
}

/// Font Awesome icon
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(optional)] icon_style: IconStyle,
    #[prop(optional)] size: IconSize,
    #[prop(optional)] kind: IconType,
    #[prop(optional)] container_size: IconContainerSize,
    #[prop(optional)] left: bool,
) -> impl IntoView {
    view! {
        <span class=container_class(kind, container_size, left)>
            <i class=glyph_class(icon_style, &name, size)></i>
        </span>
    }
}
