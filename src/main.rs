fn main() {
    grapple_swing::game::run();
}
