//! Page geometry
//!
//! The page is a single column of sections taller than the terminal,
//! scrolled between a one-row nav bar and the status line. Scroll offsets and pointer
//! positions are kept in surface units so the page behaviors work with the
//! same distances as the particle field.

use ratatui::layout::Rect;
use trovul_field::Point;
use trovul_page::Anchors;

/// Surface units per terminal column
pub const CELL_WIDTH: f32 = 8.0;
/// Surface units per terminal row
pub const CELL_HEIGHT: f32 = 16.0;
/// Rows taken by the fixed nav bar
pub const NAV_ROWS: u16 = 1;
/// Rows taken by the status line at the bottom
pub const STATUS_ROWS: u16 = 1;
/// Narrower terminals get the collapsible menu
pub const MENU_BREAKPOINT: u16 = 72;

/// Center of a terminal cell in surface units
pub fn cell_center(col: u16, row: u16) -> Point {
    Point::new(
        (col as f32 + 0.5) * CELL_WIDTH,
        (row as f32 + 0.5) * CELL_HEIGHT,
    )
}

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Proof,
    Pricing,
    Waitlist,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Features,
        Section::Proof,
        Section::Pricing,
        Section::Waitlist,
    ];

    /// Anchor id used by nav links
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "#inicio",
            Section::Features => "#recursos",
            Section::Proof => "#numeros",
            Section::Pricing => "#precos",
            Section::Waitlist => "#waitlist",
        }
    }

    /// Nav link label
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Início",
            Section::Features => "Recursos",
            Section::Proof => "Números",
            Section::Pricing => "Preços",
            Section::Waitlist => "Waitlist",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    fn rows(self, viewport_rows: u16) -> u16 {
        match self {
            Section::Hero => viewport_rows.max(12),
            Section::Features => 11,
            Section::Proof => 7,
            Section::Pricing => 13,
            Section::Waitlist => 10,
        }
    }
}

/// Row placement of every section for a given terminal size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    width: u16,
    viewport_rows: u16,
    sections: Vec<(Section, u16, u16)>,
}

impl PageLayout {
    /// Layout for a `width` x `height` terminal
    pub fn new(width: u16, height: u16) -> Self {
        let viewport_rows = height.saturating_sub(NAV_ROWS + STATUS_ROWS);
        let mut top = 0u16;
        let sections = Section::ALL
            .into_iter()
            .map(|section| {
                let rows = section.rows(viewport_rows);
                let entry = (section, top, rows);
                top = top.saturating_add(rows);
                entry
            })
            .collect();

        Self {
            width,
            viewport_rows,
            sections,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows visible between the nav bar and the status line
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn total_rows(&self) -> u16 {
        self.sections
            .last()
            .map(|(_, top, rows)| top.saturating_add(*rows))
            .unwrap_or(0)
    }

    pub fn max_scroll_rows(&self) -> u16 {
        self.total_rows().saturating_sub(self.viewport_rows)
    }

    /// Section area in page coordinates
    pub fn section(&self, section: Section) -> Rect {
        self.sections
            .iter()
            .find(|(s, _, _)| *s == section)
            .map(|(_, top, rows)| Rect::new(0, *top, self.width, *rows))
            .unwrap_or_default()
    }

    /// Whole page in page coordinates
    pub fn page_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.total_rows())
    }

    /// Section anchors at their offsets in surface units
    pub fn anchors(&self) -> Anchors {
        let mut anchors = Anchors::new();
        for (section, top, _) in &self.sections {
            anchors.insert(section.anchor(), *top as f32 * CELL_HEIGHT);
        }
        anchors
    }

    /// Whether the collapsible menu replaces the inline links
    pub fn compact_nav(&self) -> bool {
        self.width < MENU_BREAKPOINT
    }

    /// The highlighted pricing card, in page coordinates
    pub fn featured_card(&self) -> Rect {
        pricing_cards(self.section(Section::Pricing))[1]
    }

    /// The product window under the hero copy, in page coordinates
    pub fn hero_mockup(&self) -> Option<Rect> {
        hero_mockup(self.section(Section::Hero))
    }
}

/// Rows of hero copy above the mockup window
pub const HERO_COPY_ROWS: u16 = 6;
const MOCKUP_WIDTH: u16 = 40;
const MOCKUP_HEIGHT: u16 = 6;

/// The mockup window inside a hero area, if the hero has room for it
pub fn hero_mockup(area: Rect) -> Option<Rect> {
    let block = HERO_COPY_ROWS + 1 + MOCKUP_HEIGHT;
    if area.height < block + 2 || area.width < MOCKUP_WIDTH + 4 {
        return None;
    }

    let top = area.y + (area.height - block) / 2 + HERO_COPY_ROWS + 1;
    let x = area.x + (area.width - MOCKUP_WIDTH) / 2;
    Some(Rect::new(x, top, MOCKUP_WIDTH, MOCKUP_HEIGHT))
}

/// The three pricing cards inside a pricing section area
pub fn pricing_cards(area: Rect) -> [Rect; 3] {
    let top = area.y.saturating_add(2);
    let height = area.height.saturating_sub(3);
    let gap = 2u16;
    let card_width = area.width.saturating_sub(gap * 4) / 3;

    let card = |index: u16| {
        let x = area.x + gap + index * (card_width + gap);
        Rect::new(x, top, card_width, height)
    };
    [card(0), card(1), card(2)]
}
