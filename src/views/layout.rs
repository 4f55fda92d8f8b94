use crate::models::ViewSize;

pub const SMALL_BREAKPOINT: u32 = 576;
pub const MEDIUM_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub view: ViewSize,
    pub show_legend: bool,
}

impl Layout {
    pub fn for_width(viewport_width: u32) -> Self {
        if viewport_width < SMALL_BREAKPOINT {
            Self {
                view: ViewSize { width: 320, height: 300 },
                show_legend: false,
            }
        } else if viewport_width < MEDIUM_BREAKPOINT {
            Self {
                view: ViewSize { width: 500, height: 350 },
                show_legend: true,
            }
        } else {
            Self::desktop()
        }
    }

    pub fn desktop() -> Self {
        Self {
            view: ViewSize { width: 700, height: 400 },
            show_legend: true,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_tiers() {
        let mobile = Layout::for_width(375);
        assert_eq!(mobile.view, ViewSize { width: 320, height: 300 });
        assert!(!mobile.show_legend);

        let tablet = Layout::for_width(576);
        assert_eq!(tablet.view, ViewSize { width: 500, height: 350 });
        assert!(tablet.show_legend);

        assert_eq!(Layout::for_width(767).view.width, 500);
        assert_eq!(Layout::for_width(768), Layout::desktop());
        assert_eq!(Layout::for_width(1920), Layout::desktop());
    }
}
