use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

/// A dark/light palette pair. Both variants are registered with egui once at
/// startup; the theme-preference switch picks between them at runtime.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::fossil()
    }
}

impl Theme {
    pub fn fossil() -> Self {
        Theme { dark: ThemeDetails::fossil_dark(), light: ThemeDetails::fossil_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).amber).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn pill_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    surface: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    amber: Color32,
    green: Color32,
    cyan: Color32,
}

impl ThemeDetails {
    fn fossil_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x26, 0x23, 0x1e),
            surface: Color32::from_rgb(0x34, 0x30, 0x28),
            foreground: Color32::from_rgb(0xe8, 0xe2, 0xd4),
            selection: Color32::from_rgb(0x4d, 0x46, 0x3a),
            comment: Color32::from_rgb(0x99, 0x8f, 0x7d),
            red: Color32::from_rgb(0xe0, 0x6c, 0x5e),
            amber: Color32::from_rgb(0xe5, 0xa5, 0x4b),
            green: Color32::from_rgb(0x8f, 0xc1, 0x6c),
            cyan: Color32::from_rgb(0x6f, 0xc0, 0xc9),
        }
    }

    fn fossil_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf1, 0xe6),
            surface: Color32::from_rgb(0xe9, 0xe3, 0xd3),
            foreground: Color32::from_rgb(0x33, 0x2e, 0x26),
            selection: Color32::from_rgb(0xd6, 0xcd, 0xb8),
            comment: Color32::from_rgb(0x84, 0x7a, 0x68),
            red: Color32::from_rgb(0xb5, 0x43, 0x37),
            amber: Color32::from_rgb(0xa8, 0x6a, 0x1d),
            green: Color32::from_rgb(0x4e, 0x85, 0x33),
            cyan: Color32::from_rgb(0x2e, 0x7d, 0x86),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: details.surface,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: details.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    details.background,
                    details.surface,
                ),
                inactive: widget(default.widgets.inactive, details.surface, details.surface),
                hovered: widget(default.widgets.hovered, details.selection, details.cyan),
                active: widget(default.widgets.active, details.selection, details.cyan),
                open: widget(default.widgets.open, details.surface, details.amber),
            },
            selection: Selection {
                bg_fill: details.selection,
                stroke: Stroke { color: details.foreground, ..default.selection.stroke },
            },
            hyperlink_color: details.cyan,
            faint_bg_color: details.surface,
            extreme_bg_color: details.background,
            error_fg_color: details.red,
            warn_fg_color: details.amber,
            window_fill: details.background,
            panel_fill: details.background,
            ..default
        },
    );
}
