#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tab {
    Monitor,
    Temperature,
    Advanced,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Monitor, Tab::Temperature, Tab::Advanced];

    pub fn label(&self) -> &str {
        match self {
            Tab::Monitor => "Monitor",
            Tab::Temperature => "Temperature",
            Tab::Advanced => "Advanced",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Monitor => 0,
            Tab::Temperature => 1,
            Tab::Advanced => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        Tab::ALL.get(i).copied()
    }

    pub fn next(&self) -> Tab {
        let idx = (self.index() + 1) % Tab::ALL.len();
        Tab::ALL[idx]
    }

    pub fn prev(&self) -> Tab {
        let idx = if self.index() == 0 {
            Tab::ALL.len() - 1
        } else {
            self.index() - 1
        };
        Tab::ALL[idx]
    }
}

pub mod advanced;
pub mod monitor;
pub mod temperature;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(Tab::Advanced.next(), Tab::Monitor);
        assert_eq!(Tab::Monitor.prev(), Tab::Advanced);
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
    }
}
