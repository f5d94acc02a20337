use strum::IntoEnumIterator;
use temper::{Element, Fixed, Navbar, div, link, span};

fn container(navbar: &Element) -> &Element {
    navbar.child_elements().next().expect("container")
}

#[test]
fn test_navbar_root_classes() {
    let nav = Navbar::new(false).render();
    assert_eq!(nav.tag(), "nav");
    assert_eq!(nav.class_list(), vec!["navbar", "navbar-default"]);

    assert!(Navbar::new(true).is_inverse());
    let nav = Navbar::new(true).fixed_bottom().render();
    assert_eq!(
        nav.class_list(),
        vec!["navbar", "navbar-inverse", "navbar-fixed-bottom"]
    );

    let nav = Navbar::new(true).inverse_color(false).fixed_top().render();
    assert_eq!(
        nav.class_list(),
        vec!["navbar", "navbar-default", "navbar-fixed-top"]
    );
}

#[test]
fn test_fixed_mode_last_write_wins() {
    let navbar = Navbar::new(false).fixed_top().fixed(Fixed::None);
    assert_eq!(navbar.fixed_mode(), Fixed::None);
    assert_eq!(navbar.render().class_list(), vec!["navbar", "navbar-default"]);
}

#[test]
fn test_exactly_one_fixed_class() {
    for mode in Fixed::iter() {
        let nav = Navbar::new(false).fixed(mode).render();
        let fixed = nav
            .class_list()
            .into_iter()
            .filter(|c| c.starts_with("navbar-fixed-"))
            .count();
        assert_eq!(fixed, usize::from(mode != Fixed::None));
    }
}

#[test]
fn test_empty_navbar_has_bare_container() {
    let nav = Navbar::new(false).render();
    let container = container(&nav);
    assert!(container.has_class("container-fluid"));
    assert!(container.children().is_empty());
}

#[test]
fn test_render_order_independent_of_call_order() {
    let navbar = Navbar::new(false)
        .right(span().text("C"))
        .left(true, span().text("A"))
        .brand(span().text("Brand"))
        .left(false, span().text("B"));
    let nav = navbar.render();

    let sections: Vec<&Element> = container(&nav).child_elements().collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].has_class("navbar-header"));
    assert!(sections[1].has_class("collapse"));
    assert!(sections[1].has_class("navbar-collapse"));

    let brand = sections[0].child_elements().next().expect("brand");
    assert!(brand.has_class("navbar-brand"));
    assert_eq!(brand.text_content(), "Brand");

    let lists: Vec<&Element> = sections[1].child_elements().collect();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].class_list(), vec!["nav", "navbar-nav"]);
    assert_eq!(lists[1].class_list(), vec!["nav", "navbar-nav", "navbar-right"]);

    let left: Vec<&Element> = lists[0].child_elements().collect();
    assert_eq!(left.len(), 2);
    assert!(left[0].has_class("active"));
    assert_eq!(left[0].text_content(), "A");
    assert!(!left[1].has_class("active"));
    assert_eq!(left[1].text_content(), "B");

    let right: Vec<&Element> = lists[1].child_elements().collect();
    assert_eq!(right.len(), 1);
    assert_eq!(right[0].tag(), "li");
    assert!(right[0].class_list().is_empty());
    assert_eq!(right[0].text_content(), "C");
}

#[test]
fn test_active_flag_follows_entry() {
    let nav = Navbar::new(false)
        .left_link(false, "/a", "a")
        .left_link(true, "/b", "b")
        .left_link(false, "/c", "c")
        .left_link(true, "/d", "d")
        .render();

    let collapse = container(&nav).child_elements().next().expect("collapse");
    let list = collapse.child_elements().next().expect("left list");
    let actives: Vec<bool> = list
        .child_elements()
        .map(|item| item.has_class("active"))
        .collect();
    assert_eq!(actives, vec![false, true, false, true]);
}

#[test]
fn test_right_only_navbar() {
    let nav = Navbar::new(false)
        .right_link("/login", "Log in")
        .right_text("Guest")
        .render();

    let sections: Vec<&Element> = container(&nav).child_elements().collect();
    assert_eq!(sections.len(), 1);
    let lists: Vec<&Element> = sections[0].child_elements().collect();
    assert_eq!(lists.len(), 1);
    assert!(lists[0].has_class("navbar-right"));

    let items: Vec<&Element> = lists[0].child_elements().collect();
    let login = items[0].child_elements().next().expect("link");
    assert_eq!(login.tag(), "a");
    assert_eq!(login.get_attr("href"), Some("/login"));
    let text = items[1].child_elements().next().expect("text");
    assert_eq!(text.tag(), "div");
    assert!(text.has_class("navbar-text"));
}

#[test]
fn test_brand_only_navbar() {
    let nav = Navbar::new(false).brand(link("/", "Home")).render();
    let sections: Vec<&Element> = container(&nav).child_elements().collect();
    assert_eq!(sections.len(), 1);
    assert!(sections[0].has_class("navbar-header"));
}

#[test]
fn test_brand_last_write_wins() {
    let nav = Navbar::new(false)
        .brand(link("/", "First"))
        .brand(link("/", "Second"))
        .render();
    assert_eq!(nav.text_content(), "Second");
}

#[test]
fn test_render_is_idempotent() {
    let navbar = Navbar::new(true)
        .brand(link("/", "Home"))
        .left_link(true, "/a", "A")
        .right(div().text("x"));
    assert_eq!(navbar.render(), navbar.render());
    assert_eq!(Element::from(&navbar), navbar.render());
    assert_eq!(navbar.left_entries().len(), 1);
    assert_eq!(navbar.right_entries().len(), 1);
}

#[test]
fn test_navbar_markup() {
    let html = Navbar::new(false)
        .brand(link("/", "Home"))
        .left_link(true, "/a", "A")
        .render()
        .render();
    assert_eq!(
        html,
        "<nav class=\"navbar navbar-default\"><div class=\"container-fluid\">\
<div class=\"navbar-header\"><a href=\"/\" class=\"navbar-brand\">Home</a></div>\
<div class=\"collapse navbar-collapse\"><ul class=\"nav navbar-nav\">\
<li class=\"active\"><a href=\"/a\">A</a></li></ul></div></div></nav>"
    );
}

#[test]
fn test_navbar_form() {
    let form = Navbar::form("get", "/search", [span().text("q")]);
    assert_eq!(form.tag(), "form");
    assert!(form.has_class("navbar-form"));
    assert_eq!(form.get_attr("method"), Some("get"));
    assert_eq!(form.get_attr("action"), Some("/search"));
}
