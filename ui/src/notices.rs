use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice info",
            NoticeKind::Success => "notice success",
            NoticeKind::Error => "notice error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

pub fn use_notices() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}

/// Next free id given the notices still on screen. Dismissal works by id, so
/// ids must stay unique within the visible list but need no global counter.
fn next_notice_id(notices: &[Notice]) -> u64 {
    notices.iter().map(|n| n.id + 1).max().unwrap_or(0)
}

/// Append a notice; screens keep their previously loaded data in place and
/// report failures through here instead of clearing the view.
pub fn push_notice(notices: &mut Signal<Vec<Notice>>, kind: NoticeKind, message: impl Into<String>) {
    let mut notices = notices.write();
    let id = next_notice_id(&notices);
    notices.push(Notice {
        id,
        kind,
        message: message.into(),
    });
}

/// Renders pending notices and provides the signal to descendants.
#[component]
pub fn NoticeBoard(children: Element) -> Element {
    let mut notices = use_context_provider(|| Signal::new(Vec::<Notice>::new()));

    rsx! {
        div { class: "notices",
            for notice in notices() {
                div { key: "{notice.id}", class: notice.kind.class(),
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        onclick: {
                            let id = notice.id;
                            move |_| {
                                notices.write().retain(|n| n.id != id);
                            }
                        },
                        "×"
                    }
                }
            }
        }
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64) -> Notice {
        Notice {
            id,
            kind: NoticeKind::Error,
            message: format!("n{id}"),
        }
    }

    #[test]
    fn test_ids_stay_unique_after_dismissals() {
        let mut list = vec![notice(0), notice(1), notice(2)];
        list.retain(|n| n.id != 1);
        assert_eq!(next_notice_id(&list), 3);

        list.retain(|n| n.id != 2);
        list.retain(|n| n.id != 0);
        assert_eq!(next_notice_id(&list), 0);
    }

    #[test]
    fn test_dismiss_by_id_survives_list_shrinking() {
        // an id captured at render time still removes the right notice
        // after earlier entries were already dismissed
        let mut list = vec![notice(0), notice(1), notice(2)];
        let captured = 2;
        list.retain(|n| n.id != 0);
        list.retain(|n| n.id != captured);
        assert_eq!(list, vec![notice(1)]);
    }
}
