use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use crate::config::{DisplayConfig, PlayerConfig};
use crate::twitch::Stream;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data, like React props)
/// - Has State (internal state, like useState)
/// - Renders to an Element tree (virtual DOM)
pub trait Component: Send {
    /// Props type for this component
    type Props: Clone;

    /// Local state type (if any)
    type State: Default + Clone + Send + Sync + 'static;

    /// Render component given props and state (pure function)
    fn view(&self, props: &Self::Props, state: &Self::State) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (title bar, modals, popups)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

impl Element {
    /// Stack `overlay` above `self`, skipping empty overlays
    pub fn with_overlay(self, overlay: Element) -> Element {
        match overlay {
            Element::None => self,
            overlay => Element::Overlay {
                base: Box::new(self),
                overlay: Box::new(overlay),
            },
        }
    }
}

/// Layout for container elements
#[derive(Clone)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
}

/// Side effects produced by the reducer
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),

    /// Fetch the top streams of a game; the result is tagged with `generation`
    FetchStreams {
        game: String,
        offset: u32,
        limit: u32,
        generation: u64,
    },

    /// Hand a stream to the external player
    LaunchPlayer {
        stream: Box<Stream>,
        player: PlayerConfig,
    },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => write!(f, "Action({:?})", action),
            Effect::Batch(effects) => write!(f, "Batch({:?})", effects),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchStreams {
                game,
                offset,
                limit,
                generation,
            } => write!(
                f,
                "FetchStreams {{ game: {:?}, offset: {}, limit: {}, generation: {} }}",
                game, offset, limit, generation
            ),
            Effect::LaunchPlayer { stream, player } => write!(
                f,
                "LaunchPlayer {{ channel: {:?}, command: {:?} }}",
                stream.user_login, player.command
            ),
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}
