pub use crate::animation::*;
pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::{ConfigError, ObserveError};
pub use crate::geometry::{Size, Transform, Vec2};
pub use crate::locals::{Host, Theme, host, theme, with_host, with_theme};
pub use crate::modifier::{AlignItems, JustifyContent, Modifier};
pub use crate::runtime::{
    ComposeGuard, compose, remember, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{ManualScheduler, Scheduler, TimerHandle};
pub use crate::view::{FontFamily, FontWeight, TextRole, View, ViewId, ViewKind};
pub use crate::visibility::{
    AlwaysVisible, IntersectionCallback, ManualObserver, ObservationHandle, VisibilityObserver,
};
