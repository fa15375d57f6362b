use web_sys::{Element, MouseEvent};

use crate::{
    helper::{closest_with_class, TargetCast},
    marker::IconMarkers,
    node::LikeNode,
    LikeConfig, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ToggledIcon<N> {
    pub icon: N,
    pub before: IconMarkers,
    pub after: IconMarkers,
}

#[derive(Debug, PartialEq)]
pub enum ClickOutcome<N> {
    /// The click wasn't on (or inside) a like button.
    Ignored,
    Toggled {
        /// The element carrying the like class.
        button: N,
        /// Empty if the button had no icon to toggle.
        icons: Vec<ToggledIcon<N>>,
    },
}

impl<N> ClickOutcome<N> {
    /// Liked state of the first toggled icon.
    pub fn liked(&self) -> Option<bool> {
        match self {
            Self::Ignored => None,
            Self::Toggled { icons, .. } => icons.first().and_then(|v| v.after.is_liked()),
        }
    }
}

/// The element(s) whose markers get toggled for a click on `target`.
///
/// A click landing on the button container toggles its children, otherwise the target is the icon.
pub fn resolve_icons<N: LikeNode>(target: &N, config: &LikeConfig) -> Vec<N> {
    if target.has_class(&config.button_class) {
        target.children()
    } else {
        vec![target.clone()]
    }
}

pub fn toggle_icons<N: LikeNode>(target: &N, config: &LikeConfig) -> Result<Vec<ToggledIcon<N>>> {
    resolve_icons(target, config)
        .into_iter()
        .map(|icon| {
            let before = IconMarkers::read(&icon, config);

            if !before.is_valid() {
                log::warn!("Like icon has invalid markers {before:?}. Toggling anyway.");
            }

            let after = IconMarkers::toggle_on(&icon, config)?;

            Ok(ToggledIcon { icon, before, after })
        })
        .collect()
}

pub fn is_liked<N: LikeNode>(target: &N, config: &LikeConfig) -> Option<bool> {
    resolve_icons(target, config)
        .first()
        .and_then(|icon| IconMarkers::read(icon, config).is_liked())
}

/// Delegated click handling. `prevent_default` is only called for clicks on a like button.
pub fn dispatch_click<N: LikeNode>(
    target: N,
    root: Option<&N>,
    config: &LikeConfig,
    prevent_default: impl FnOnce(),
) -> Result<ClickOutcome<N>> {
    let Some(button) = closest_with_class(target.clone(), &config.like_class, root) else {
        return Ok(ClickOutcome::Ignored);
    };

    prevent_default();

    let icons = toggle_icons(&target, config)?;

    if icons.is_empty() {
        log::debug!("Like button has no icon to toggle");
    }

    Ok(ClickOutcome::Toggled { button, icons })
}

pub fn handle_click(
    event: &MouseEvent,
    root: Option<&Element>,
    config: &LikeConfig,
) -> Result<ClickOutcome<Element>> {
    let Some(target) = event.target_dyn_into::<Element>() else {
        return Ok(ClickOutcome::Ignored);
    };

    dispatch_click(target, root, config, || event.prevent_default())
}
