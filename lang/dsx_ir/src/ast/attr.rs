//! Attribute-name nodes: `data-<plugin>` and its suffixes.

use crate::name::Name;
use crate::span::Span;

/// The closed plugin vocabulary. Attribute names outside this set do not
/// parse; there is no escape hatch for unknown plugins.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Plugin {
    Attr,
    Bind,
    Class,
    Computed,
    Effect,
    Ignore,
    IgnoreMorph,
    Indicator,
    Init,
    JsonSignals,
    On,
    OnIntersect,
    OnInterval,
    OnSignalPatch,
    OnSignalPatchFilter,
    PreserveAttr,
    Ref,
    Show,
    Signals,
    Style,
    Text,
    Animate,
    CustomValidity,
    OnRaf,
    OnResize,
    Persist,
    QueryString,
    ReplaceUrl,
    Rocket,
    ScrollIntoView,
    ViewTransition,
}

impl Plugin {
    /// Every plugin, standard set first, pro set after.
    pub const ALL: [Plugin; 31] = [
        Plugin::Attr,
        Plugin::Bind,
        Plugin::Class,
        Plugin::Computed,
        Plugin::Effect,
        Plugin::Ignore,
        Plugin::IgnoreMorph,
        Plugin::Indicator,
        Plugin::Init,
        Plugin::JsonSignals,
        Plugin::On,
        Plugin::OnIntersect,
        Plugin::OnInterval,
        Plugin::OnSignalPatch,
        Plugin::OnSignalPatchFilter,
        Plugin::PreserveAttr,
        Plugin::Ref,
        Plugin::Show,
        Plugin::Signals,
        Plugin::Style,
        Plugin::Text,
        Plugin::Animate,
        Plugin::CustomValidity,
        Plugin::OnRaf,
        Plugin::OnResize,
        Plugin::Persist,
        Plugin::QueryString,
        Plugin::ReplaceUrl,
        Plugin::Rocket,
        Plugin::ScrollIntoView,
        Plugin::ViewTransition,
    ];

    /// The attribute-name spelling of the plugin.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Plugin::Attr => "attr",
            Plugin::Bind => "bind",
            Plugin::Class => "class",
            Plugin::Computed => "computed",
            Plugin::Effect => "effect",
            Plugin::Ignore => "ignore",
            Plugin::IgnoreMorph => "ignore-morph",
            Plugin::Indicator => "indicator",
            Plugin::Init => "init",
            Plugin::JsonSignals => "json-signals",
            Plugin::On => "on",
            Plugin::OnIntersect => "on-intersect",
            Plugin::OnInterval => "on-interval",
            Plugin::OnSignalPatch => "on-signal-patch",
            Plugin::OnSignalPatchFilter => "on-signal-patch-filter",
            Plugin::PreserveAttr => "preserve-attr",
            Plugin::Ref => "ref",
            Plugin::Show => "show",
            Plugin::Signals => "signals",
            Plugin::Style => "style",
            Plugin::Text => "text",
            Plugin::Animate => "animate",
            Plugin::CustomValidity => "custom-validity",
            Plugin::OnRaf => "on-raf",
            Plugin::OnResize => "on-resize",
            Plugin::Persist => "persist",
            Plugin::QueryString => "query-string",
            Plugin::ReplaceUrl => "replace-url",
            Plugin::Rocket => "rocket",
            Plugin::ScrollIntoView => "scroll-into-view",
            Plugin::ViewTransition => "view-transition",
        }
    }

    /// Whether the plugin ships in the pro distribution rather than the
    /// standard one.
    #[must_use]
    pub const fn is_pro(self) -> bool {
        matches!(
            self,
            Plugin::Animate
                | Plugin::CustomValidity
                | Plugin::OnRaf
                | Plugin::OnResize
                | Plugin::Persist
                | Plugin::QueryString
                | Plugin::ReplaceUrl
                | Plugin::Rocket
                | Plugin::ScrollIntoView
                | Plugin::ViewTransition
        )
    }

    /// Exact-spelling lookup.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Plugin> {
        Plugin::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// A `__modifier` suffix, optionally carrying a dotted argument:
/// `debounce.500ms` has name `debounce` and argument `500ms`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Modifier {
    pub name: Name,
    pub arg: Option<Name>,
    pub span: Span,
}

/// What follows the plugin name.
///
/// A plugin takes either its own modifier or a key (itself optionally
/// modified), never both.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeDetail {
    /// Bare `data-<plugin>`.
    Plain,
    /// `data-<plugin>__<modifier>`.
    Modified(Modifier),
    /// `data-<plugin>:<key>` with an optional `__<modifier>` on the key.
    Keyed { key: Name, modifier: Option<Modifier> },
}

/// A fully recognized attribute name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub plugin: Plugin,
    pub detail: AttributeDetail,
    pub span: Span,
}
