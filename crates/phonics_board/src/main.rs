fn main() {
    phonics_board::run();
}
