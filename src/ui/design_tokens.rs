// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the presenter views.

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const JUMP_INPUT_WIDTH: f32 = 64.0;
    pub const ZOOM_SLIDER_WIDTH: f32 = 140.0;
    pub const OVERLAY_WIDTH: f32 = 520.0;
    pub const OVERVIEW_TILE: f32 = 56.0;
}

pub mod typography {
    pub const TITLE: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const ACTIVE: f32 = 3.0;
    pub const HIGHLIGHT: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}
