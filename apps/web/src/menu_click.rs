use std::rc::Rc;

/// What a click inside the tag container asks the gallery to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Select(String),
    Toggle(usize),
}

impl MenuAction {
    /// A sub item wins over the menu entry that contains it.
    pub fn resolve(sub_item_label: Option<String>, entry_index: Option<&str>) -> Option<Self> {
        if let Some(label) = sub_item_label {
            return Some(Self::Select(label));
        }
        entry_index
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .map(Self::Toggle)
    }
}

pub trait MenuTarget {
    fn select(&self, name: &str);
    fn toggle(&self, index: usize);
}

/// Builds the click dispatcher. It owns a strong handle, so the target
/// lives as long as the listener it is installed in.
pub fn dispatcher<T>(target: Rc<T>) -> impl FnMut(MenuAction)
where
    T: MenuTarget + ?Sized,
{
    move |action| match action {
        MenuAction::Select(name) => target.select(&name),
        MenuAction::Toggle(index) => target.toggle(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<MenuAction>>,
    }

    impl MenuTarget for Recorder {
        fn select(&self, name: &str) {
            self.seen.borrow_mut().push(MenuAction::Select(name.to_string()));
        }

        fn toggle(&self, index: usize) {
            self.seen.borrow_mut().push(MenuAction::Toggle(index));
        }
    }

    #[test]
    fn sub_item_label_selects() {
        assert_eq!(
            MenuAction::resolve(Some("Field Notes".to_string()), Some("0")),
            Some(MenuAction::Select("Field Notes".to_string()))
        );
    }

    #[test]
    fn entry_index_toggles() {
        assert_eq!(MenuAction::resolve(None, Some("2")), Some(MenuAction::Toggle(2)));
        assert_eq!(MenuAction::resolve(None, Some("two")), None);
        assert_eq!(MenuAction::resolve(None, None), None);
    }

    #[test]
    fn dispatcher_keeps_target_alive_after_caller_drops_it() {
        let target = Rc::new(Recorder::default());
        let mut dispatch = dispatcher(Rc::clone(&target));
        let observer = Rc::downgrade(&target);
        drop(target);

        dispatch(MenuAction::Toggle(1));
        dispatch(MenuAction::Select("B".to_string()));

        let seen = observer.upgrade().map(|target| target.seen.take());
        assert_eq!(
            seen,
            Some(vec![MenuAction::Toggle(1), MenuAction::Select("B".to_string())]),
            "target was freed while the listener lived"
        );
    }
}
