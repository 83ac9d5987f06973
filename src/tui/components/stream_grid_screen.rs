use crate::layout_constants::CELL_TOP_BAR_HEIGHT;
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::grid::GridMetrics;
use crate::tui::state::ScreenState;
use crate::tui::widgets::{GridViewWidget, MessageOverlayWidget, TitleBarWidget};

#[derive(Clone, Debug)]
pub struct StreamGridScreenProps {
    pub screen: ScreenState,
    /// A modal is open over the grid
    pub modal_open: bool,
}

/// StreamGridScreen component - grid, title bar and load indicators
///
/// Stacking order, bottom to top: the grid, the title bar, then the
/// loading indicator or error view. Only mounted views are rendered.
pub struct StreamGridScreen;

impl Component for StreamGridScreen {
    type Props = StreamGridScreenProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        let screen = &props.screen;

        let grid = match screen.grid.get() {
            Some(view) => Element::Widget(Box::new(GridViewWidget {
                streams: screen.streams.clone(),
                metrics: GridMetrics::terminal(),
                focus: view.focus,
                scroll_section: view.scroll_section,
                dimmed: props.modal_open,
            })),
            None => Element::None,
        };

        let title_bar = match screen.title_bar.get() {
            Some(view) => vertical(
                [
                    Constraint::Length(CELL_TOP_BAR_HEIGHT as u16),
                    Constraint::Min(0),
                ],
                vec![
                    Element::Widget(Box::new(TitleBarWidget::new(view.title.clone()))),
                    Element::None,
                ],
            ),
            None => Element::None,
        };

        let indicator = if screen.is_loading() {
            Element::Widget(Box::new(MessageOverlayWidget::loading()))
        } else if let Some(message) = screen.error_message() {
            Element::Widget(Box::new(MessageOverlayWidget::error(message)))
        } else {
            Element::None
        };

        grid.with_overlay(title_bar).with_overlay(indicator)
    }
}
