use crate::{AnimationSpec, Brush, Color, Size, Transform};

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridColumns {
    Fixed(usize),
    /// As many columns as fit, each at least this wide.
    AutoFit { min_width: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub columns: GridColumns,
    pub row_gap: f32,
    pub column_gap: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Relative,
    Absolute,
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JustifyContent {
    Start,
    Center,
    End,
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignItems {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub background: Option<Brush>,
    /// Foreground for text and links inside the node.
    pub content_color: Option<Color>,
    pub border: Option<Border>,
    /// Accent stripe on the leading edge (width, color).
    pub border_left: Option<(f32, Color)>,
    pub clip_rounded: Option<f32>,
    pub shadow: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_wrap: bool,
    pub gap: Option<f32>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub center_horizontally: bool,
    pub z_index: Option<i32>,
    pub semantics: Option<crate::Semantics>,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    pub transition: Option<AnimationSpec>,
    pub grid: Option<GridConfig>,
    pub grid_col_span: Option<u16>,
    pub position_type: Option<PositionType>,
    pub offset_left: Option<f32>,
    pub offset_right: Option<f32>,
    pub offset_top: Option<f32>,
    pub offset_bottom: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub scroll_y: bool,
    /// Document anchor (`id` attribute), the target of `#fragment` links.
    pub anchor: Option<String>,
    /// Stable key hosts use to find the rendered element (`data-node`).
    pub node_key: Option<String>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max_w", &self.fill_max_w)
            .field("padding", &self.padding)
            .field("padding_values", &self.padding_values)
            .field("min_height", &self.min_height)
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("background", &self.background)
            .field("content_color", &self.content_color)
            .field("border", &self.border)
            .field("border_left", &self.border_left)
            .field("clip_rounded", &self.clip_rounded)
            .field("shadow", &self.shadow)
            .field("flex_grow", &self.flex_grow)
            .field("flex_wrap", &self.flex_wrap)
            .field("gap", &self.gap)
            .field("justify_content", &self.justify_content)
            .field("align_items_container", &self.align_items_container)
            .field("center_horizontally", &self.center_horizontally)
            .field("z_index", &self.z_index)
            .field("semantics", &self.semantics)
            .field("alpha", &self.alpha)
            .field("transform", &self.transform)
            .field("transition", &self.transition)
            .field("grid", &self.grid)
            .field("grid_col_span", &self.grid_col_span)
            .field("position_type", &self.position_type)
            .field("offset_left", &self.offset_left)
            .field("offset_right", &self.offset_right)
            .field("offset_top", &self.offset_top)
            .field("offset_bottom", &self.offset_bottom)
            .field("margin_top", &self.margin_top)
            .field("margin_bottom", &self.margin_bottom)
            .field("scroll_y", &self.scroll_y)
            .field("anchor", &self.anchor)
            .field("node_key", &self.node_key)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    /// Vertical and horizontal padding.
    pub fn padding_xy(self, vertical: f32, horizontal: f32) -> Self {
        self.padding_values(PaddingValues {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        })
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn max_height(mut self, h: f32) -> Self {
        self.max_height = Some(h);
        self
    }
    /// Set a solid color background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(Brush::Solid(color));
        self
    }
    pub fn content_color(mut self, color: Color) -> Self {
        self.content_color = Some(color);
        self
    }
    /// Set a brush (solid, gradient, etc.) background.
    pub fn background_brush(mut self, brush: Brush) -> Self {
        self.background = Some(brush);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn border_left(mut self, width: f32, color: Color) -> Self {
        self.border_left = Some((width, color));
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    /// Drop shadow; `elevation` is the blur radius in px.
    pub fn shadow(mut self, elevation: f32) -> Self {
        self.shadow = Some(elevation);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_wrap(mut self) -> Self {
        self.flex_wrap = true;
        self
    }
    pub fn gap(mut self, v: f32) -> Self {
        self.gap = Some(v);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    pub fn center_horizontally(mut self) -> Self {
        self.center_horizontally = true;
        self
    }
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }
    pub fn semantics(mut self, s: crate::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }
    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = Some(t);
        self
    }
    pub fn transition(mut self, spec: AnimationSpec) -> Self {
        self.transition = Some(spec);
        self
    }
    pub fn grid(mut self, columns: usize, row_gap: f32, column_gap: f32) -> Self {
        self.grid = Some(GridConfig {
            columns: GridColumns::Fixed(columns),
            row_gap,
            column_gap,
        });
        self
    }
    pub fn grid_auto(mut self, min_width: f32, gap: f32) -> Self {
        self.grid = Some(GridConfig {
            columns: GridColumns::AutoFit { min_width },
            row_gap: gap,
            column_gap: gap,
        });
        self
    }
    pub fn grid_span(mut self, col_span: u16) -> Self {
        self.grid_col_span = Some(col_span);
        self
    }
    pub fn absolute(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self
    }
    pub fn fixed(mut self) -> Self {
        self.position_type = Some(PositionType::Fixed);
        self
    }
    pub fn relative(mut self) -> Self {
        self.position_type = Some(PositionType::Relative);
        self
    }
    pub fn offset(
        mut self,
        left: Option<f32>,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
    ) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
        self
    }
    pub fn margin_top(mut self, v: f32) -> Self {
        self.margin_top = Some(v);
        self
    }
    pub fn margin_bottom(mut self, v: f32) -> Self {
        self.margin_bottom = Some(v);
        self
    }
    pub fn scroll_y(mut self) -> Self {
        self.scroll_y = true;
        self
    }
    pub fn anchor(mut self, id: impl Into<String>) -> Self {
        self.anchor = Some(id.into());
        self
    }
    pub fn node_key(mut self, key: impl Into<String>) -> Self {
        self.node_key = Some(key.into());
        self
    }
}
