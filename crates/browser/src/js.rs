use serde_json::Value;

/// Build the banner subtree described by a serialized `NoticeMarkup` and
/// append it to the document body. Click handlers suppress the default link
/// navigation and record the choice on the container's dataset.
pub const INSERT_NOTICE: &str = r#"
(markup) => {
    if (document.getElementById('cookieNotice')) {
        return { success: false, error: 'Notice already present' };
    }

    const notice = document.createElement('div');
    notice.setAttribute('id', 'cookieNotice');
    notice.innerHTML = markup.message + '&nbsp;';

    const style = notice.style;
    style.position = 'fixed';
    if (markup.position === 'top') {
        style.top = '0';
    } else {
        style.bottom = '0';
    }
    style.left = '0';
    style.right = '0';
    style.background = markup.bgColor;
    style.color = markup.textColor;
    style.zIndex = '999';
    style.padding = '10px 5px';
    style.textAlign = 'center';
    style.fontSize = '12px';
    style.lineHeight = '28px';
    style.fontFamily = 'Helvetica neue, Helvetica, sans-serif';

    const button = (def, className, choice) => {
        const el = document.createElement('a');
        el.href = '#';
        el.innerHTML = def.label;
        el.className = className;
        el.style.background = def.bgColor;
        el.style.color = def.textColor;
        el.style.textDecoration = 'none';
        el.style.display = 'inline-block';
        el.style.padding = '0 15px';
        el.style.margin = '0 0 0 10px';
        el.addEventListener('click', (e) => {
            e.preventDefault();
            notice.dataset.choice = choice;
        });
        return el;
    };

    document.body.appendChild(notice);

    if (markup.learnMore) {
        const link = document.createElement('a');
        link.href = markup.learnMore.href;
        link.textContent = markup.learnMore.label;
        link.target = '_blank';
        link.className = 'learn-more';
        link.style.color = markup.learnMore.color;
        link.style.textDecoration = 'none';
        link.style.display = 'inline';
        notice.appendChild(link);
    }

    notice.appendChild(document.createElement('br'));
    notice.appendChild(button(markup.deny, 'deny', 'deny'));
    notice.appendChild(button(markup.accept, 'confirm', 'accept'));

    return { success: true };
}
"#;

pub const COOKIE_STRING: &str = r#"
() => document.cookie
"#;

pub const SET_COOKIE: &str = r#"
(raw) => {
    document.cookie = raw;
    return { success: true };
}
"#;

pub const PAGE_LANGUAGE: &str = r#"
() => ({
    document: document.documentElement.lang || null,
    navigator: navigator.language || navigator.userLanguage || null
})
"#;

/// Consume a recorded click, if any.
pub const TAKE_CHOICE: &str = r#"
() => {
    const el = document.getElementById('cookieNotice');
    if (!el || !el.dataset.choice) return { choice: null };
    const choice = el.dataset.choice;
    delete el.dataset.choice;
    return { choice };
}
"#;

pub const SET_NOTICE_OPACITY: &str = r#"
(opacity) => {
    const el = document.getElementById('cookieNotice');
    if (!el) return { success: false, error: 'Notice not found' };
    el.style.opacity = opacity;
    return { success: true };
}
"#;

pub const REMOVE_NOTICE: &str = r#"
() => {
    const el = document.getElementById('cookieNotice');
    if (!el) return { success: false, error: 'Notice not found' };
    el.parentNode.removeChild(el);
    return { success: true };
}
"#;

pub fn build_js_call(func: &str, args: &[Value]) -> String {
    let args_str = args
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})({})", func, args_str)
}
