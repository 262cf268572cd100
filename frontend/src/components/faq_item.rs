use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible question; the answer is passed as children.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
            <style>
                {r#"
                .faq-item { border-bottom: 1px solid #e5e7eb; }
                .faq-question {
                    width: 100%; display: flex; justify-content: space-between; align-items: center;
                    padding: 1rem 0; background: none; border: none; font-size: 1.05rem;
                    font-weight: 600; text-align: start; cursor: pointer;
                }
                .faq-item.open .toggle-icon { color: #facc15; }
                .faq-answer { padding: 0 0 1rem; color: #4b5563; line-height: 1.6; }
                "#}
            </style>
        </div>
    }
}
