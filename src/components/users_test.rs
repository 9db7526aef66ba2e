use super::*;

fn directory_user(firstname: &str, lastname: &str) -> DirectoryUser {
    DirectoryUser {
        id: "u7".to_owned(),
        firstname: firstname.to_owned(),
        lastname: lastname.to_owned(),
        username: "someone".to_owned(),
    }
}

#[test]
fn initials_uppercase_both_names() {
    assert_eq!(initials("alice", "iyer"), "AI");
}

#[test]
fn initials_fall_back_when_names_are_empty() {
    assert_eq!(initials("", ""), "?");
    assert_eq!(initials("bob", ""), "B");
}

#[test]
fn send_money_href_carries_id_and_encoded_name() {
    let href = send_money_href(&directory_user("Alice", "Iyer"));
    assert_eq!(href, "/send?id=u7&name=Alice%20Iyer");
}
