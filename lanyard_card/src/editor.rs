// Copyright 2026 the Lanyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing sessions for one card face.

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{
    CardSide, DesignLimits, DesignPatch, Employee, PreviewOptions, Template, TemplateDesign,
    preview::{CardScene, render_card},
};

/// A control group in the editor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorTab {
    /// Logo visibility, position and size.
    #[default]
    Logo,
    /// Photo visibility, shape, position and size. Front only.
    Photo,
    /// Fill and pattern.
    Background,
    /// Name and detail text styles.
    Text,
}

impl EditorTab {
    /// The tabs offered for `side`, in display order.
    #[must_use]
    pub fn for_side(side: CardSide) -> &'static [Self] {
        match side {
            CardSide::Front => &[Self::Logo, Self::Photo, Self::Background, Self::Text],
            CardSide::Back => &[Self::Logo, Self::Background, Self::Text],
        }
    }
}

/// A label and value shown in the editor's quick-stats panel.
pub type SummaryStat = (&'static str, String);

/// An in-progress edit of one card face.
///
/// The editor keeps the design it was opened with and a draft. Patches only
/// touch the draft; [`save`](Self::save) hands the draft back and
/// [`cancel`](Self::cancel) discards it. Both snapshots are shared `Arc`s, so
/// previews and undo stacks can hold on to them cheaply.
///
/// ```
/// use lanyard_card::{CardSide, DesignEditor, DesignPatch, PhotoShape, Template};
///
/// let template = Template::new("Corporate");
/// let mut editor = DesignEditor::for_template(&template, CardSide::Front);
///
/// assert!(editor.apply(&DesignPatch::new().with_photo_shape(PhotoShape::Circle)));
/// assert!(editor.is_dirty());
/// assert_eq!(editor.revision(), 1);
///
/// // Re-applying the same value is not a change.
/// assert!(!editor.apply(&DesignPatch::new().with_photo_shape(PhotoShape::Circle)));
/// assert_eq!(editor.revision(), 1);
///
/// let saved = editor.save();
/// assert_eq!(saved.photo_shape, PhotoShape::Circle);
/// ```
#[derive(Clone, Debug)]
pub struct DesignEditor {
    side: CardSide,
    limits: DesignLimits,
    saved: Arc<TemplateDesign>,
    draft: Arc<TemplateDesign>,
    revision: u64,
    tab: EditorTab,
    show_logo: bool,
    show_photo: bool,
}

impl DesignEditor {
    /// Opens an editor on `design` as the `side` face.
    #[must_use]
    pub fn new(side: CardSide, design: TemplateDesign) -> Self {
        let saved = Arc::new(design);
        Self {
            side,
            limits: DesignLimits::for_side(side),
            draft: Arc::clone(&saved),
            saved,
            revision: 0,
            tab: EditorTab::Logo,
            show_logo: true,
            show_photo: side == CardSide::Front,
        }
    }

    /// Opens an editor on one face of `template`.
    #[must_use]
    pub fn for_template(template: &Template, side: CardSide) -> Self {
        Self::new(side, *template.side(side))
    }

    /// The face being edited.
    #[must_use]
    pub fn side(&self) -> CardSide {
        self.side
    }

    /// The ranges patches are clamped to.
    #[must_use]
    pub fn limits(&self) -> &DesignLimits {
        &self.limits
    }

    /// The design the editor was opened with.
    #[must_use]
    pub fn saved(&self) -> &Arc<TemplateDesign> {
        &self.saved
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &Arc<TemplateDesign> {
        &self.draft
    }

    /// Number of changes made to the draft. Unchanged by no-op patches.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the draft differs from the saved design.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !Arc::ptr_eq(&self.draft, &self.saved) && *self.draft != *self.saved
    }

    /// Applies `patch` to the draft. Returns `true` if the draft changed.
    pub fn apply(&mut self, patch: &DesignPatch) -> bool {
        let next = patch.apply(&self.draft, &self.limits);
        self.replace_draft(next)
    }

    /// Discards the draft's changes. Returns `true` if anything was discarded.
    pub fn reset(&mut self) -> bool {
        if *self.draft == *self.saved {
            self.draft = Arc::clone(&self.saved);
            return false;
        }
        self.draft = Arc::clone(&self.saved);
        self.bump("reset");
        true
    }

    fn replace_draft(&mut self, next: TemplateDesign) -> bool {
        if next == *self.draft {
            return false;
        }
        self.draft = Arc::new(next);
        self.bump("patch applied");
        true
    }

    fn bump(&mut self, what: &'static str) {
        self.revision += 1;
        tracing::debug!(side = ?self.side, revision = self.revision, "{what}");
    }

    /// Ends the session, returning the draft to be stored.
    #[must_use]
    pub fn save(self) -> TemplateDesign {
        tracing::debug!(side = ?self.side, revision = self.revision, "design saved");
        *self.draft
    }

    /// Ends the session without storing, returning the design it was opened with.
    #[must_use]
    pub fn cancel(self) -> TemplateDesign {
        *self.saved
    }

    /// The active tab.
    #[must_use]
    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    /// Switches tab. Returns `false` for a tab this side does not offer.
    pub fn set_tab(&mut self, tab: EditorTab) -> bool {
        if !EditorTab::for_side(self.side).contains(&tab) {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Flips logo visibility in the preview and returns the new state.
    pub fn toggle_logo(&mut self) -> bool {
        self.show_logo = !self.show_logo;
        self.show_logo
    }

    /// Flips photo visibility in the preview and returns the new state.
    ///
    /// The back has no photo, so this stays `false` there.
    pub fn toggle_photo(&mut self) -> bool {
        if self.side == CardSide::Front {
            self.show_photo = !self.show_photo;
        }
        self.show_photo
    }

    /// The preview toggles.
    #[must_use]
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            show_logo: self.show_logo,
            show_photo: self.show_photo,
        }
    }

    /// Renders the draft for `employee`.
    #[must_use]
    pub fn preview(&self, employee: &Employee) -> CardScene {
        render_card(&self.draft, self.side, employee, self.preview_options())
    }

    /// The quick stats for the draft: logo size, plus photo shape on the
    /// front or background pattern on the back.
    #[must_use]
    pub fn summary(&self) -> [SummaryStat; 2] {
        let logo = ("Logo Size", format!("{}px", self.draft.logo_size));
        let detail = match self.side {
            CardSide::Front => ("Photo Shape", String::from(self.draft.photo_shape.name())),
            CardSide::Back => (
                "Pattern",
                String::from(self.draft.background_pattern.name()),
            ),
        };
        [logo, detail]
    }
}
