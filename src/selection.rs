use crate::catalog::ServiceId;

/// Scrolling owed after a selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Nothing,
    /// Panel already mounted, only its content changed.
    Detail,
    /// Panel just mounted: bring it into view, then its feature list.
    DetailAndFeatures,
}

/// Which service card is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoneSelected,
    Selected(ServiceId),
}

impl Selection {
    /// Card click: opens `id`, switches to it, or closes it when it is already open.
    pub fn click(self, id: ServiceId) -> Self {
        match self {
            Selection::Selected(current) if current == id => Selection::NoneSelected,
            _ => Selection::Selected(id),
        }
    }

    pub fn close(self) -> Self {
        Selection::NoneSelected
    }

    pub fn selected(self) -> Option<ServiceId> {
        match self {
            Selection::Selected(id) => Some(id),
            Selection::NoneSelected => None,
        }
    }

    pub fn is_selected(self, id: ServiceId) -> bool {
        self.selected() == Some(id)
    }

    pub fn reveal_on(self, next: Selection) -> Reveal {
        match (self, next) {
            (_, Selection::NoneSelected) => Reveal::Nothing,
            (Selection::NoneSelected, Selection::Selected(_)) => Reveal::DetailAndFeatures,
            (Selection::Selected(_), Selection::Selected(_)) => Reveal::Detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [ServiceId; 3] = [ServiceId(1), ServiceId(2), ServiceId(3)];

    #[test]
    fn starts_with_nothing_selected() {
        assert_eq!(Selection::default(), Selection::NoneSelected);
        assert_eq!(Selection::default().selected(), None);
    }

    #[test]
    fn double_click_toggles_off() {
        for id in IDS {
            let once = Selection::default().click(id);
            assert_eq!(once, Selection::Selected(id));
            assert_eq!(once.click(id), Selection::NoneSelected);
        }
    }

    #[test]
    fn clicking_another_card_switches_directly() {
        for x in IDS {
            for y in IDS.into_iter().filter(|y| *y != x) {
                let state = Selection::default().click(x).click(y);
                assert_eq!(state, Selection::Selected(y));
                let open: Vec<_> = IDS.iter().filter(|id| state.is_selected(**id)).collect();
                assert_eq!(open, vec![&y]);
            }
        }
    }

    #[test]
    fn close_always_clears() {
        assert_eq!(Selection::NoneSelected.close(), Selection::NoneSelected);
        for id in IDS {
            assert_eq!(Selection::Selected(id).close(), Selection::NoneSelected);
        }
    }

    #[test]
    fn walkthrough() {
        let state = Selection::default().click(ServiceId(2));
        assert_eq!(state.selected(), Some(ServiceId(2)));
        assert!(!state.is_selected(ServiceId(1)));
        let state = state.click(ServiceId(2));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn features_scroll_only_when_panel_mounts() {
        let (x, y) = (ServiceId(1), ServiceId(2));
        let opened = Selection::default().click(x);
        assert_eq!(Selection::default().reveal_on(opened), Reveal::DetailAndFeatures);

        let switched = opened.click(y);
        assert_eq!(opened.reveal_on(switched), Reveal::Detail);

        assert_eq!(switched.reveal_on(switched.click(y)), Reveal::Nothing);
        assert_eq!(switched.reveal_on(switched.close()), Reveal::Nothing);
        assert_eq!(Selection::default().reveal_on(Selection::default()), Reveal::Nothing);

        // Closing and reopening mounts a fresh panel.
        let reopened = switched.close().click(y);
        assert_eq!(switched.close().reveal_on(reopened), Reveal::DetailAndFeatures);
    }
}
