/// Dashboard tabs. Exactly one is active; the button and the panel derive
/// their `active` class from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Predict,
    Transactions,
    Analytics,
    Simulation,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Predict, Tab::Transactions, Tab::Analytics, Tab::Simulation];

    /// Id of the panel element.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Predict => "tab-predict",
            Tab::Transactions => "tab-transactions",
            Tab::Analytics => "tab-analytics",
            Tab::Simulation => "tab-simulation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Predict => "Скоринг",
            Tab::Transactions => "Транзакции",
            Tab::Analytics => "Аналитика",
            Tab::Simulation => "Симуляция",
        }
    }
}

pub fn button_class(tab: Tab, selected: Tab) -> &'static str {
    if tab == selected {
        "tab-button active"
    } else {
        "tab-button"
    }
}

pub fn panel_class(tab: Tab, selected: Tab) -> &'static str {
    if tab == selected {
        "tab-panel active"
    } else {
        "tab-panel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_active(class: &str) -> bool {
        class.split_whitespace().any(|c| c == "active")
    }

    #[test]
    fn test_exactly_one_active_pair_after_any_selection() {
        for selected in Tab::ALL {
            let buttons: Vec<_> = Tab::ALL
                .into_iter()
                .filter(|t| is_active(button_class(*t, selected)))
                .collect();
            let panels: Vec<_> = Tab::ALL
                .into_iter()
                .filter(|t| is_active(panel_class(*t, selected)))
                .collect();
            assert_eq!(buttons.len(), 1);
            assert_eq!(panels.len(), 1);
            assert_eq!(buttons[0].key(), panels[0].key());
            assert_eq!(buttons[0], selected);
        }
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<_> = Tab::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Tab::ALL.len());
        assert_eq!(Tab::default(), Tab::Predict);
    }
}
