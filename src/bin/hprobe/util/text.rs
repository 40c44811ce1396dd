pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];

    for word in text.split_whitespace() {
        let current = lines.last_mut().expect("lines starts non-empty");
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(word.to_string());
        }
    }

    lines
}
