fn main() -> anyhow::Result<()> {
  biblio_lib::run()
}
