// SPDX-License-Identifier: MPL-2.0
//! Masonry grid of gallery tiles.
//!
//! Items flow in page order down the first column, then the next, with
//! column breaks chosen so the estimated column heights stay balanced.
//! Tiles are clickable and fade in individually as they scroll into view.

use crate::gallery::{GalleryItem, ItemId};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::image_frame;
use crate::ui::state::image_load::Display;
use crate::ui::state::visibility::{Appearance, RootMargin};
use crate::ui::styles;
use crate::ui::widgets::reveal;
use iced::widget::{button, container, mouse_area, responsive, Column, Row, Stack};
use iced::{mouse, ContentFit, Element, Length};

/// Gap between columns and between tiles.
pub const GAP: f32 = spacing::LG;

/// Everything the grid needs to draw one tile.
#[derive(Debug, Clone, Copy)]
pub struct Tile<'a> {
    pub item: &'a GalleryItem,
    pub display: Display<'a>,
    /// Height/width ratio: the decoded one when known, else the estimate.
    pub aspect: f32,
    pub appearance: Appearance,
    /// Whether the tile still needs to report its first intersection.
    pub observing: bool,
    pub hovered: bool,
}

/// Contextual data needed to render a grid.
pub struct ViewContext<'a> {
    pub tiles: Vec<Tile<'a>>,
    pub margin: RootMargin,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    Open(ItemId),
    Hover(ItemId, bool),
    Revealed(ItemId),
}

/// Number of columns for the available width.
#[must_use]
pub fn column_count(width: f32) -> usize {
    if width < sizing::BREAKPOINT_MD {
        1
    } else if width < sizing::BREAKPOINT_LG {
        2
    } else {
        3
    }
}

/// Splits `heights` (in order) into at most `columns` contiguous runs with
/// balanced totals. Returns the item indices of each column.
///
/// Each column takes items while the next item's midpoint still fits under
/// the running target (remaining height divided by remaining columns). A
/// column always takes at least one item.
#[must_use]
pub fn distribute(heights: &[f32], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut result = vec![Vec::new(); columns];
    let mut remaining: f32 = heights.iter().sum();
    let mut next = 0;

    for (column_index, column) in result.iter_mut().enumerate() {
        let columns_left = columns - column_index;
        if columns_left == 1 {
            column.extend(next..heights.len());
            break;
        }

        let target = remaining / columns_left as f32;
        let mut filled = 0.0;
        while next < heights.len() {
            let height = heights[next];
            let items_left = heights.len() - next;
            if !column.is_empty()
                && (filled + height / 2.0 > target || items_left < columns_left)
            {
                break;
            }
            column.push(next);
            filled += height;
            next += 1;
        }
        remaining -= filled;
    }

    result
}

/// Render a grid for the current width.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |size| {
        let columns = column_count(size.width);
        let column_width = column_width(size.width, columns);

        let heights: Vec<f32> = ctx
            .tiles
            .iter()
            .map(|tile| tile_height(tile, column_width))
            .collect();

        let mut row = Row::new().spacing(GAP).width(Length::Fill);
        for indices in distribute(&heights, columns) {
            let mut column = Column::new().spacing(GAP).width(Length::Fill);
            for index in indices {
                column = column.push(view_tile(ctx.tiles[index], heights[index], ctx.margin));
            }
            row = row.push(column);
        }
        row.into()
    })
    .into()
}

fn column_width(width: f32, columns: usize) -> f32 {
    let gaps = GAP * (columns.saturating_sub(1)) as f32;
    ((width - gaps) / columns as f32).max(1.0)
}

fn tile_height(tile: &Tile<'_>, column_width: f32) -> f32 {
    (column_width * tile.aspect).max(image_frame::min_height(&tile.display))
}

fn view_tile<'a>(tile: Tile<'a>, height: f32, margin: RootMargin) -> Element<'a, Message> {
    let alpha = tile.appearance.opacity;
    let id = tile.item.id;

    let frame = image_frame::view(image_frame::ViewContext {
        display: tile.display,
        fit: ContentFit::Cover,
        alpha,
        surface: Some(palette::STONE_100),
    });

    let wash = container(Column::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::fill(styles::button::tile_wash(tile.hovered)));

    let content = Stack::new()
        .push(frame)
        .push(wash)
        .width(Length::Fill)
        .height(Length::Fixed(height));

    let tile_button = button(content)
        .on_press(Message::Open(id))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile(alpha));

    let hover_area = mouse_area(tile_button)
        .on_enter(Message::Hover(id, true))
        .on_exit(Message::Hover(id, false))
        .interaction(mouse::Interaction::Pointer);

    reveal(hover_area)
        .margin(margin)
        .offset_y(tile.appearance.offset_y)
        .on_reveal_maybe(tile.observing.then_some(Message::Revealed(id)))
        .into()
}
