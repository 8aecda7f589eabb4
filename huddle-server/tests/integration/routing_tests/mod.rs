mod test_concurrent_joins;
mod test_screen_sharing_broadcast;
